//! Murillo: a social media post generation pipeline over the Gemini API.
//!
//! One brief in, one fully-formed post out: structured copy, a derived
//! text-free visual concept, a generated image, and a quality analysis.
//! On top of that single-post protocol sit post-hoc operations (optimize,
//! image refinement, video generation, multi-network replication), a
//! monthly batch orchestrator with rate pacing and partial-failure
//! tolerance, and a template compositor for brand overlays.
//!
//! # Example
//!
//! ```rust,ignore
//! use murillo::{GeminiGateway, PostFormat, PostInput, PostPipeline, SocialNetwork};
//!
//! # async fn run() -> murillo::MurilloResult<()> {
//! murillo::init_telemetry();
//!
//! let pipeline = PostPipeline::new(GeminiGateway::from_env()?);
//! let input = PostInput::builder()
//!     .idea("Launch of our spring collection".to_string())
//!     .social_network(SocialNetwork::Instagram)
//!     .post_format(PostFormat::Feed)
//!     .build()
//!     .unwrap();
//!
//! let post = pipeline.generate(&input).await?;
//! println!("{}", post.main_copy);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod telemetry;

pub use telemetry::init_telemetry;

pub use murillo_compose::TemplateCompositor;
pub use murillo_core::{
    AspectRatio, CopyLength, GeneratedPost, Idea, Language, MediaData, PostAnalysis, PostFormat,
    PostInput, PostInputBuilder, Progress, ScoreCategory, SocialNetwork, TemplateData,
    TemplateKind, Tone, Usernames,
};
pub use murillo_error::{
    CompositeError, CompositeErrorKind, GatewayError, GatewayErrorKind, MurilloError,
    MurilloErrorKind, MurilloResult, PipelineError, PipelineErrorKind, PipelineStage,
};
pub use murillo_gateway::{
    Clock, GatewayConfig, GatewayConfigBuilder, GeminiGateway, ModelGateway, TokioClock, VideoJob,
    VideoJobStatus, await_video_completion, decode_structured, VIDEO_POLL_INTERVAL,
};
pub use murillo_pipeline::{
    IdeaFailure, INTER_POST_DELAY, MonthlyReport, PostPipeline, PromptComposer,
};
