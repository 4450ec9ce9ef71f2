//! Single-file operations: decode, transform, encode.

use std::path::Path;

use tracing::info;

use crate::decode::decode_file;
use crate::encode::encode_file;
use crate::error::Result;
use crate::transform::{apply_rotation, shrink, RotationOptions};

/// Shrink the image at `input` on both sides and write it to `output`.
///
/// `scale_factor` is the total fraction of the width removed, in `[0, 1)`.
pub fn shrink_image(input: &Path, output: &Path, scale_factor: f64) -> Result<()> {
    let image = decode_file(input)?;
    let shrunk = shrink(&image, scale_factor)?;
    encode_file(&shrunk, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        scale_factor,
        width = shrunk.width,
        "Shrunk image"
    );
    Ok(())
}

/// Rotate the image at `input` by `angle_degrees` and write it to `output`.
pub fn rotate_image(
    input: &Path,
    output: &Path,
    angle_degrees: f64,
    options: &RotationOptions,
) -> Result<()> {
    let image = decode_file(input)?;
    let rotated = apply_rotation(&image, angle_degrees, options)?;
    encode_file(&rotated, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        angle_degrees,
        width = rotated.width,
        height = rotated.height,
        "Rotated image"
    );
    Ok(())
}
