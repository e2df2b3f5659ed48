//! Top-level error wrapper types.

use crate::{CompositeError, GatewayError, PipelineError};

/// Union of the subsystem error types.
///
/// # Examples
///
/// ```
/// use murillo_error::{GatewayError, GatewayErrorKind, MurilloError};
///
/// let gw = GatewayError::new(GatewayErrorKind::NoImageProduced);
/// let err: MurilloError = gw.into();
/// assert!(format!("{}", err).contains("no image"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum MurilloErrorKind {
    /// Model gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Pipeline orchestration error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Template compositing error
    #[from(CompositeError)]
    Composite(CompositeError),
}

/// Murillo error with kind discrimination.
///
/// # Examples
///
/// ```
/// use murillo_error::{MurilloResult, PipelineError, PipelineErrorKind};
///
/// fn might_fail() -> MurilloResult<()> {
///     Err(PipelineError::new(PipelineErrorKind::NoIdeasProduced))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display)]
#[display("Murillo Error: {}", _0)]
pub struct MurilloError(Box<MurilloErrorKind>);

impl std::error::Error for MurilloError {}

impl MurilloError {
    /// Create a new error from a kind.
    pub fn new(kind: MurilloErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MurilloErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MurilloErrorKind
impl<T> From<T> for MurilloError
where
    T: Into<MurilloErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Murillo operations.
pub type MurilloResult<T> = std::result::Result<T, MurilloError>;
