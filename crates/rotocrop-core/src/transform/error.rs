//! Error types for geometric transforms.

use thiserror::Error;

/// Errors that can occur while cropping or rotating.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A crop/rotate parameter is outside its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Singular matrix (non-invertible)
    #[error("singular transformation matrix")]
    SingularMatrix,
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
