//! Core data types for the Murillo content generation library.
//!
//! This crate provides the immutable data model shared by the gateway,
//! pipeline, and compositor crates: the user brief ([`PostInput`]), the
//! generated output ([`GeneratedPost`]), quality analysis, batch progress
//! snapshots, and the per-network catalog tables.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod catalog;
mod input;
mod media;
mod post;
mod progress;

pub use analysis::{PostAnalysis, ScoreCategory};
pub use catalog::{AspectRatio, CopyLength, Language, PostFormat, SocialNetwork, Tone};
pub use input::{PostInput, PostInputBuilder, Usernames};
pub use media::{MediaData, TemplateData, TemplateKind};
pub use post::GeneratedPost;
pub use progress::{Idea, Progress};
