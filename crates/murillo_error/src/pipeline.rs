//! Pipeline error types.

/// Stages of the single-post generation protocol and its post-hoc operations.
///
/// Stage names appear verbatim in user-visible failures so an operator can
/// tell which external call broke before deciding whether to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineStage {
    /// Structured copy generation (title, copy, variants, hashtags, cta, tip)
    #[display("text generation")]
    TextGeneration,
    /// Derivation of the text-free visual concept from the generated copy
    #[display("visual prompt derivation")]
    VisualPrompt,
    /// Image generation from the composed visual prompt
    #[display("image generation")]
    ImageGeneration,
    /// Quality analysis scoring
    #[display("analysis")]
    Analysis,
    /// Copy rewrite targeting weak analysis categories
    #[display("optimization")]
    Optimization,
    /// Post-hoc image mutation
    #[display("image refinement")]
    ImageRefinement,
    /// Image-to-video generation
    #[display("video generation")]
    VideoGeneration,
    /// Monthly ideation call
    #[display("ideation")]
    Ideation,
}

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PipelineErrorKind {
    /// A pipeline stage failed; the whole run for this post is aborted
    #[display("Stage '{}' failed: {}", stage, message)]
    Stage {
        /// The stage that failed
        stage: PipelineStage,
        /// Underlying error message, passed through verbatim
        message: String,
    },
    /// Monthly ideation returned an empty idea list
    #[display("Ideation produced no post ideas for the monthly plan")]
    NoIdeasProduced,
    /// Every idea in the monthly batch failed to generate
    #[display("All {} post generations failed during the monthly batch", attempted)]
    AllIdeasFailed {
        /// Number of ideas attempted
        attempted: usize,
    },
}

/// Pipeline error with source location tracking.
///
/// # Examples
///
/// ```
/// use murillo_error::{PipelineError, PipelineErrorKind, PipelineStage};
///
/// let err = PipelineError::new(PipelineErrorKind::Stage {
///     stage: PipelineStage::ImageGeneration,
///     message: "quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("image generation"));
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create a stage failure wrapping the underlying error's message.
    #[track_caller]
    pub fn stage(stage: PipelineStage, source: impl std::fmt::Display) -> Self {
        Self::new(PipelineErrorKind::Stage {
            stage,
            message: source.to_string(),
        })
    }
}
