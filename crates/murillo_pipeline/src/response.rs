//! Typed shapes for structured model responses.
//!
//! Field names mirror the camelCase keys of the response schemas in
//! [`PromptComposer`](crate::PromptComposer); decoding goes through the
//! strict decode-or-fail boundary so a malformed response never leaks
//! partial data into a post.

use murillo_core::Idea;
use serde::Deserialize;

/// Copy generation response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Short headline, produced only when the schema requires it
    #[serde(default)]
    pub title: Option<String>,
    /// The main copy
    pub main_copy: String,
    /// Alternative versions of the main copy
    #[serde(default)]
    pub variants: Vec<String>,
    /// Space-separated lowercase hashtags, possibly empty
    pub hashtags: String,
    /// Call to action, possibly empty
    pub cta: String,
    /// Optional extra tip for the author
    #[serde(default)]
    pub tip: Option<String>,
}

/// Optimization response: the only two fields optimization may rewrite.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedCopy {
    /// Rewritten main copy
    pub main_copy: String,
    /// Rewritten hashtags
    pub hashtags: String,
}

/// Ideation response.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaList {
    /// Generated post ideas, in model order
    #[serde(default)]
    pub ideas: Vec<IdeaSeed>,
}

/// One ideation entry.
#[derive(Debug, Clone, Deserialize)]
pub struct IdeaSeed {
    /// The idea text
    pub idea: String,
}

impl IdeaSeed {
    /// The idea as a core domain value.
    pub fn into_idea(self) -> Idea {
        Idea(self.idea)
    }
}
