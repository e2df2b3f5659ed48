//! Batch progress reporting types.

use serde::{Deserialize, Serialize};

/// A single post idea produced by the monthly ideation stage.
///
/// Ephemeral: consumed immediately by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct Idea(pub String);

impl Idea {
    /// The idea text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Read-only progress snapshot emitted by the monthly orchestrator.
///
/// Not persisted, only observed by the caller's progress callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Ideas attempted so far (0 for the post-ideation event)
    pub current_step: usize,
    /// Total ideas in the batch
    pub total_steps: usize,
    /// Short human-readable phase description
    pub message: String,
    /// 0 to 100
    pub percentage: u8,
}
