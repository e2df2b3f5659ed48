//! The user brief driving one generation run.

use crate::{CopyLength, Language, MediaData, PostFormat, SocialNetwork, TemplateData, Tone};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Per-network display usernames shown in the rendered preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Usernames {
    /// Use the global handle for every network
    pub use_global: bool,
    /// Handle applied everywhere when `use_global` is set
    pub global: String,
    /// Instagram handle
    pub instagram: String,
    /// TikTok handle
    pub tiktok: String,
    /// LinkedIn handle
    pub linkedin: String,
}

/// Immutable brief for one generation run.
///
/// Owned by the caller and never mutated by the core. The builder fills
/// sensible defaults for everything except the idea so tests and callers
/// only state what they care about.
///
/// # Examples
///
/// ```
/// use murillo_core::{PostInput, SocialNetwork, PostFormat};
///
/// let input = PostInput::builder()
///     .idea("Product launch".to_string())
///     .social_network(SocialNetwork::TikTok)
///     .post_format(PostFormat::Feed)
///     .build()
///     .unwrap();
///
/// // TikTok does not accept feed posts, so the effective format is coerced.
/// assert_eq!(input.effective_format(), PostFormat::ShortVideo);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct PostInput {
    /// Free-text idea or, for monthly generation, the full strategy brief
    pub idea: String,
    /// Optional brand-voice profile; secondary to tone, never overrides it
    #[builder(default)]
    pub user_profile: Option<String>,
    /// Optional reference image attached to the text generation call
    #[builder(default)]
    pub image: Option<MediaData>,
    /// Optional PDF used as the primary information source
    #[builder(default)]
    pub pdf: Option<MediaData>,
    /// Optional overlay template applied after generation
    #[builder(default)]
    pub template: Option<TemplateData>,
    /// Target network
    pub social_network: SocialNetwork,
    /// Requested format; coerced via [`PostInput::effective_format`]
    pub post_format: PostFormat,
    /// Selected tones; empty means neutral
    #[builder(default)]
    pub tones: Vec<Tone>,
    /// Length tier for the main copy
    #[builder(default = "CopyLength::Medium")]
    pub copy_length: CopyLength,
    /// Output language of the copy
    #[builder(default = "Language::Spanish")]
    pub language: Language,
    /// Whether to include a call to action
    #[builder(default = "true")]
    pub include_cta: bool,
    /// Whether to include hashtags
    #[builder(default = "true")]
    pub include_hashtags: bool,
    /// Display usernames
    #[builder(default)]
    pub usernames: Usernames,
}

impl PostInput {
    /// Creates a new builder for `PostInput`.
    pub fn builder() -> PostInputBuilder {
        PostInputBuilder::default()
    }

    /// The format actually used for generation.
    ///
    /// When the requested format is outside the network's allowed set it is
    /// coerced to the network's default rather than rejected.
    pub fn effective_format(&self) -> PostFormat {
        if self
            .social_network
            .allowed_formats()
            .contains(&self.post_format)
        {
            self.post_format
        } else {
            self.social_network.default_format()
        }
    }

    /// A copy of this brief with the idea replaced, everything else kept.
    ///
    /// Used by the monthly orchestrator to run one pipeline per idea.
    pub fn with_idea(&self, idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brief(network: SocialNetwork, format: PostFormat) -> PostInput {
        PostInput::builder()
            .idea("launch".to_string())
            .social_network(network)
            .post_format(format)
            .build()
            .unwrap()
    }

    #[test]
    fn allowed_format_passes_through() {
        let input = brief(SocialNetwork::Instagram, PostFormat::Story);
        assert_eq!(input.effective_format(), PostFormat::Story);
    }

    #[test]
    fn disallowed_format_coerces_to_network_default() {
        let input = brief(SocialNetwork::LinkedIn, PostFormat::Story);
        assert_eq!(input.effective_format(), PostFormat::Feed);

        let input = brief(SocialNetwork::TikTok, PostFormat::Feed);
        assert_eq!(input.effective_format(), PostFormat::ShortVideo);
    }

    #[test]
    fn with_idea_keeps_every_other_field() {
        let input = brief(SocialNetwork::Instagram, PostFormat::Feed);
        let replaced = input.with_idea("new idea");
        assert_eq!(replaced.idea, "new idea");
        assert_eq!(replaced.social_network, input.social_network);
        assert_eq!(replaced.copy_length, input.copy_length);
        assert_eq!(replaced.language, input.language);
    }
}
