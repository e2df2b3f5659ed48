//! Compositing error types.

/// Specific error conditions for template compositing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompositeErrorKind {
    /// Base or template image could not be decoded
    #[display("Failed to decode image: {}", _0)]
    Decode(String),
    /// Merged image could not be encoded
    #[display("Failed to encode merged image: {}", _0)]
    Encode(String),
}

/// Compositing error with source location tracking.
///
/// Compositing cannot silently skip a malformed input: the caller explicitly
/// asked for templating, so a decode failure is fatal for the operation.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Compositing Error: {} at line {} in {}", kind, line, file)]
pub struct CompositeError {
    /// The specific error condition
    pub kind: CompositeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl std::error::Error for CompositeError {}

impl CompositeError {
    /// Create a new CompositeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompositeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
