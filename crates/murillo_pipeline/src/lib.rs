//! Generation pipeline for the Murillo content generation library.
//!
//! [`PostPipeline`] drives one brief through the four-stage protocol
//! (copy, visual prompt, image, analysis) over any [`ModelGateway`]
//! implementation, and exposes the post-hoc operations: analyze, optimize,
//! image refinement, video generation, and multi-network replication.
//! [`PromptComposer`] owns every instruction and response schema the model
//! sees. The monthly batch orchestrator fans one strategic brief into
//! sequential, rate-paced per-idea runs with partial-failure tolerance.
//!
//! [`ModelGateway`]: murillo_gateway::ModelGateway

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod monthly;
mod pipeline;
mod response;

pub use composer::PromptComposer;
pub use monthly::{IdeaFailure, INTER_POST_DELAY, MonthlyReport};
pub use pipeline::{PostPipeline, TEXT_TEMPERATURE, VISUAL_TEMPERATURE};
pub use response::{IdeaList, IdeaSeed, OptimizedCopy, PostDraft};
