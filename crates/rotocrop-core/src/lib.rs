//! Rotocrop Core - crop and rotate transforms for dataset preparation
//!
//! This crate provides the building blocks of the `rotocrop` tool:
//!
//! - `decode` / `encode` - file and buffer codecs backed by the `image` crate
//! - `transform` - symmetric horizontal shrink and canvas-expanding rotation
//! - `walk` - recursive listing of files by extension
//! - `pipeline` - single-file decode, transform, encode operations
//! - `config` - batch configuration, loadable from TOML
//! - `batch` - the driver that processes a whole dataset tree
//!
//! All operations are synchronous and single-threaded.

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
mod error;
pub mod pipeline;
pub mod transform;
pub mod walk;

pub use batch::{output_file_name, run_batch, BatchFailure, BatchReport};
pub use config::{BatchConfig, ConfigError, ErrorPolicy};
pub use decode::{decode_bytes, decode_file, DecodeError, PixelGrid};
pub use encode::{encode_bytes, encode_file, EncodeError};
pub use error::{Error, Result};
pub use pipeline::{rotate_image, shrink_image};
pub use transform::{
    apply_rotation, compute_rotated_bounds, rotate, shrink, InterpolationFilter, RotationOptions,
    TransformError,
};
pub use walk::{list_files, WalkError};
