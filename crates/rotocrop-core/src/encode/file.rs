//! Encoding pixel grids to files and in-memory buffers.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat};
use thiserror::Error;
use tracing::debug;

use crate::decode::PixelGrid;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * channels), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero, or the channel count is unsupported
    #[error("Invalid dimensions: {width}x{height} with {channels} channels")]
    InvalidDimensions { width: u32, height: u32, channels: u8 },

    /// Output format could not be determined or is not supported
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// Destination could not be written (permissions, missing parent directory)
    #[error("I/O error writing {path}: {message}")]
    Io { path: String, message: String },

    /// Encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a grid to `path`, picking the format from the extension.
///
/// # Errors
///
/// Returns `EncodeError::UnsupportedFormat` for an unknown extension and
/// `EncodeError::Io` when the destination cannot be written. The parent
/// directory is not created.
pub fn encode_file(image: &PixelGrid, path: &Path) -> Result<(), EncodeError> {
    validate(image)?;

    let format = ImageFormat::from_path(path)
        .map_err(|e| EncodeError::UnsupportedFormat(format!("{}: {e}", path.display())))?;
    let dynamic = to_encodable(image, format)?;

    dynamic
        .save_with_format(path, format)
        .map_err(|e| map_image_error(path, e))?;

    debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Encoded image"
    );
    Ok(())
}

/// Encode a grid into an in-memory buffer of the given format.
pub fn encode_bytes(image: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    validate(image)?;

    let dynamic = to_encodable(image, format)?;
    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, format)
        .map_err(|e| map_image_error(Path::new("<memory>"), e))?;

    Ok(buffer.into_inner())
}

fn validate(image: &PixelGrid) -> Result<(), EncodeError> {
    if image.width == 0 || image.height == 0 || !(1..=4).contains(&image.channels) {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
            channels: image.channels,
        });
    }

    let expected = image.height as usize * image.row_stride();
    if image.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    Ok(())
}

/// Build an encoder-ready buffer. JPEG has no alpha channel, so alpha is
/// dropped for that format.
fn to_encodable(image: &PixelGrid, format: ImageFormat) -> Result<image::DynamicImage, EncodeError> {
    let dynamic = image
        .to_dynamic()
        .ok_or_else(|| EncodeError::EncodingFailed("pixel buffer rejected".to_string()))?;

    Ok(match (format, image.channels) {
        (ImageFormat::Jpeg, 2) => image::DynamicImage::ImageLuma8(dynamic.into_luma8()),
        (ImageFormat::Jpeg, 4) => image::DynamicImage::ImageRgb8(dynamic.into_rgb8()),
        _ => dynamic,
    })
}

fn map_image_error(path: &Path, err: ImageError) -> EncodeError {
    match err {
        ImageError::IoError(e) => EncodeError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
        ImageError::Unsupported(e) => EncodeError::UnsupportedFormat(e.to_string()),
        other => EncodeError::EncodingFailed(other.to_string()),
    }
}
