//! The generated post record.

use crate::{MediaData, PostAnalysis, PostFormat};
use serde::{Deserialize, Serialize};

/// The unit of output from one pipeline run.
///
/// Every stage and post-hoc operation produces a new augmented copy rather
/// than patching fields in place, so a caller can always diff before/after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Short headline; present only for networks that require one
    pub title: Option<String>,
    /// The main, optimized copy
    pub main_copy: String,
    /// Two alternative versions of the main copy
    pub variants: Vec<String>,
    /// Space-separated lowercase hashtags
    pub hashtags: String,
    /// Recommended call to action
    pub cta: String,
    /// Optional extra tip or creative idea
    pub tip: Option<String>,
    /// Generated image, if image generation has run
    pub generated_image: Option<MediaData>,
    /// The exact prompt sent to the image model, kept for traceability and
    /// as a seed for later refinement
    pub initial_image_prompt: String,
    /// Download URI of the generated video, if video generation has run
    pub generated_video_url: Option<String>,
    /// Quality analysis, if analysis has run
    pub analysis: Option<PostAnalysis>,
    /// The format this post was generated for
    pub post_format: PostFormat,
}

impl GeneratedPost {
    /// A copy with the analysis attached.
    pub fn with_analysis(&self, analysis: PostAnalysis) -> Self {
        Self {
            analysis: Some(analysis),
            ..self.clone()
        }
    }

    /// A copy with rewritten copy and hashtags plus a fresh analysis.
    ///
    /// This is the only mutation optimization is allowed to make: title,
    /// variants, cta, tip, and all image fields are carried unchanged.
    pub fn with_optimized_copy(
        &self,
        main_copy: impl Into<String>,
        hashtags: impl Into<String>,
        analysis: PostAnalysis,
    ) -> Self {
        Self {
            main_copy: main_copy.into(),
            hashtags: hashtags.into(),
            analysis: Some(analysis),
            ..self.clone()
        }
    }

    /// A copy with the generated image replaced.
    pub fn with_image(&self, image: MediaData) -> Self {
        Self {
            generated_image: Some(image),
            ..self.clone()
        }
    }

    /// A copy with the video URL attached.
    pub fn with_video_url(&self, url: impl Into<String>) -> Self {
        Self {
            generated_video_url: Some(url.into()),
            ..self.clone()
        }
    }
}
