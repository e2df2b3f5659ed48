//! Gateway error types for external model calls.

/// Specific error conditions raised at the model gateway boundary.
///
/// Transport errors keep the underlying message verbatim so callers can
/// diagnose which external call failed without re-wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Transport-level failure (connection, timeout, serialization)
    #[display("Gateway transport failed: {}", _0)]
    Transport(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error body returned by the API
        message: String,
    },
    /// Model response did not match the expected structured shape
    #[display("Response violated expected schema: {}", _0)]
    SchemaViolation(String),
    /// Image mutation completed but returned no image part
    #[display("Model returned no image in its response")]
    NoImageProduced,
    /// Video job reached a terminal state without a playable URI
    #[display("Video generation failed: {}", _0)]
    VideoGenerationFailed(String),
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use murillo_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl std::error::Error for GatewayError {}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
