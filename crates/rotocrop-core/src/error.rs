//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::TransformError;
use crate::walk::WalkError;

/// Any failure surfaced by rotocrop operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No output name can be derived for a source file.
    #[error("cannot derive an output name for {0}: base name is not valid UTF-8 or lacks the extension")]
    OutputName(std::path::PathBuf),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for rotocrop operations
pub type Result<T> = std::result::Result<T, Error>;
