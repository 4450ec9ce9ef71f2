//! Decoding image files and in-memory buffers into pixel grids.

use std::io::{self, Cursor};
use std::path::Path;

use image::{ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, PixelGrid};

/// Decode an image file into a `PixelGrid`.
///
/// The format is guessed from the file contents, falling back to the
/// extension. The channel layout of the source is kept.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file is missing or unreadable,
/// `DecodeError::InvalidFormat` if the format is not recognized, and
/// `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_file(path: &Path) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::open(path)
        .map_err(|e| io_error(path, e))?
        .with_guessed_format()
        .map_err(|e| io_error(path, e))?;

    let img = reader.decode().map_err(|e| map_image_error(path, e))?;
    let grid = PixelGrid::from_dynamic(img);

    debug!(
        path = %path.display(),
        width = grid.width,
        height = grid.height,
        channels = grid.channels,
        "Decoded image"
    );
    Ok(grid)
}

/// Decode an in-memory encoded image into a `PixelGrid`.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat(
            "unrecognized image signature".to_string(),
        ));
    }

    let img = reader
        .decode()
        .map_err(|e| map_image_error(Path::new("<memory>"), e))?;
    Ok(PixelGrid::from_dynamic(img))
}

fn io_error(path: &Path, err: io::Error) -> DecodeError {
    DecodeError::IoError(format!("{}: {err}", path.display()))
}

fn map_image_error(path: &Path, err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(e) => {
            DecodeError::InvalidFormat(format!("{}: {e}", path.display()))
        }
        ImageError::IoError(e) => io_error(path, e),
        other => DecodeError::CorruptedFile(format!("{}: {other}", path.display())),
    }
}
