//! Per-network catalog: formats, defaults, title rules, and length bands.
//!
//! All lookups here are immutable tables expressed as exhaustive matches, so
//! adding a network or format is a compile-enforced change rather than a
//! runtime configuration edit.

use serde::{Deserialize, Serialize};

/// Target social networks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum SocialNetwork {
    /// Instagram (feed, story, and reel formats)
    Instagram,
    /// TikTok (short-video only)
    TikTok,
    /// LinkedIn (feed only)
    LinkedIn,
}

impl SocialNetwork {
    /// Formats this network accepts.
    pub fn allowed_formats(&self) -> &'static [PostFormat] {
        match self {
            SocialNetwork::Instagram => {
                &[PostFormat::Feed, PostFormat::Story, PostFormat::ShortVideo]
            }
            SocialNetwork::TikTok => &[PostFormat::ShortVideo],
            SocialNetwork::LinkedIn => &[PostFormat::Feed],
        }
    }

    /// The format used when the requested one is not in the allowed set.
    pub fn default_format(&self) -> PostFormat {
        self.allowed_formats()[0]
    }

    /// Whether posts for this network carry a short headline.
    pub fn requires_title(&self) -> bool {
        matches!(self, SocialNetwork::TikTok | SocialNetwork::LinkedIn)
    }

    /// Target character band for the main copy, keyed by length tier.
    ///
    /// Bands are phrased as prompt-ready text because the model consumes
    /// them directly inside the task instruction.
    pub fn character_band(&self, length: CopyLength) -> &'static str {
        match (self, length) {
            (SocialNetwork::Instagram, CopyLength::Short) => "125-150 characters",
            (SocialNetwork::Instagram, CopyLength::Medium) => "300-500 characters",
            (SocialNetwork::Instagram, CopyLength::Long) => "up to 2000 characters",
            (SocialNetwork::TikTok, CopyLength::Short) => "100-150 characters",
            (SocialNetwork::TikTok, CopyLength::Medium) => "200-300 characters",
            (SocialNetwork::TikTok, CopyLength::Long) => "up to 1000 characters",
            (SocialNetwork::LinkedIn, CopyLength::Short) => "up to 300 characters",
            (SocialNetwork::LinkedIn, CopyLength::Medium) => "500-800 characters",
            (SocialNetwork::LinkedIn, CopyLength::Long) => "1500-2000 characters",
        }
    }
}

/// Publishing formats, constrained per network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum PostFormat {
    /// Standard feed/wall post
    #[strum(serialize = "feed post")]
    Feed,
    /// Ephemeral story
    #[strum(serialize = "story")]
    Story,
    /// Reel / short vertical video
    #[strum(serialize = "short video")]
    ShortVideo,
}

impl PostFormat {
    /// Image aspect ratio for this format.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            PostFormat::Feed => AspectRatio::Square,
            PostFormat::Story | PostFormat::ShortVideo => AspectRatio::Tall,
        }
    }
}

/// Aspect ratio requested from the image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum AspectRatio {
    /// 1:1, used for feed posts
    #[strum(serialize = "1:1")]
    Square,
    /// 9:16, used for stories and short video covers
    #[strum(serialize = "9:16")]
    Tall,
}

/// Communication tones. The selected tone is the dominant directive for
/// copy generation and always outranks the brand-voice profile.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Tone {
    /// Professional, structured, no colloquialisms
    Formal,
    /// Corporate voice reflecting company culture and values
    Institutional,
    /// Persuasion-first, benefit-driven, urgent CTA
    Commercial,
    /// Warm, conversational, emoji-friendly
    Friendly,
    /// Built around one memorable, motivating phrase
    Inspirational,
    /// Entertaining, wordplay and light irony
    Humorous,
    /// Direct and informative with no emotional load
    Neutral,
}

/// Copy length tiers; the concrete character band depends on the network.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum CopyLength {
    /// Shortest band for the network
    #[strum(serialize = "short")]
    Short,
    /// Middle band
    #[strum(serialize = "medium")]
    Medium,
    /// Longest band
    #[strum(serialize = "long")]
    Long,
}

/// Output language of the generated copy.
///
/// The derived visual prompt is always English regardless of this setting;
/// only the post text follows it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Language {
    /// Spanish
    Spanish,
    /// English
    English,
}
