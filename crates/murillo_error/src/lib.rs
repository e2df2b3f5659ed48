//! Error types for the Murillo content generation library.
//!
//! Each subsystem has its own kind enum plus a wrapper struct that records
//! the source location where the error was raised. Everything converts into
//! the top-level [`MurilloError`] for propagation with `?`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compose;
mod error;
mod gateway;
mod pipeline;

pub use compose::{CompositeError, CompositeErrorKind};
pub use error::{MurilloError, MurilloErrorKind, MurilloResult};
pub use gateway::{GatewayError, GatewayErrorKind};
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineStage};
