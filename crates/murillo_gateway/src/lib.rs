//! Model gateway for the Murillo content generation library.
//!
//! This crate owns the boundary to the external generation capability: the
//! [`ModelGateway`] trait describing the four single-shot operations the
//! pipeline needs, the strict decode-or-fail helper for structured
//! responses, an injectable [`Clock`] for the video poll loop, and the
//! [`GeminiGateway`] REST implementation.
//!
//! No call here retries automatically. Retry, backoff, and user-facing
//! messaging are the calling layer's responsibility.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod clock;
mod decode;
mod gemini;
mod traits;
mod video;

pub use clock::{Clock, TokioClock};
pub use decode::decode_structured;
pub use gemini::{GatewayConfig, GatewayConfigBuilder, GeminiGateway};
pub use traits::{ModelGateway, VideoJob, VideoJobStatus};
pub use video::{VIDEO_POLL_INTERVAL, await_video_completion};
