//! Horizontal shrinking and pixel-rectangle cropping.
//!
//! `shrink` removes a fraction of the width, split evenly between the left
//! and right edges. All intermediate values are truncated toward zero to
//! land on integer pixel columns, so the kept region can sit up to one
//! pixel off the mathematical center.
//!
//! # Example
//!
//! ```ignore
//! // Drop 20% of the width: 10% from each side
//! let narrowed = shrink(&image, 0.2)?;
//! ```

use tracing::debug;

use super::{TransformError, TransformResult};
use crate::decode::PixelGrid;

/// Column span kept by `shrink` for a given width and scale factor.
///
/// Returns `(left_start, new_width)`, where
/// `new_width = floor(width * (1 - scale_factor))` and
/// `left_start = floor(width * scale_factor / 2)`.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if `scale_factor` is not in
/// `[0, 1)` or would leave no columns.
pub fn shrink_span(width: u32, scale_factor: f64) -> TransformResult<(u32, u32)> {
    if !scale_factor.is_finite() || !(0.0..1.0).contains(&scale_factor) {
        return Err(TransformError::InvalidParameter(format!(
            "shrink factor must be in [0, 1), got {scale_factor}"
        )));
    }

    let w = width as f64;
    let new_width = (w * (1.0 - scale_factor)).floor() as u32;
    let left_start = (w * scale_factor / 2.0).floor() as u32;

    if new_width == 0 {
        return Err(TransformError::InvalidParameter(format!(
            "shrink factor {scale_factor} leaves no columns of a {width}px wide image"
        )));
    }

    Ok((left_start, new_width))
}

/// Remove `scale_factor` of the image width, half from each side.
///
/// All rows are kept; the result contains columns
/// `[left_start, left_start + new_width)` of the source.
///
/// # Arguments
///
/// * `image` - Source image
/// * `scale_factor` - Total fraction of the width to remove, in `[0, 1)`
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` for a factor outside `[0, 1)`,
/// a factor that would leave zero columns, or a malformed source grid.
pub fn shrink(image: &PixelGrid, scale_factor: f64) -> TransformResult<PixelGrid> {
    ensure_well_formed(image)?;
    let (left_start, new_width) = shrink_span(image.width, scale_factor)?;

    // Fast path: nothing removed
    if left_start == 0 && new_width == image.width {
        return Ok(image.clone());
    }

    debug!(
        width = image.width,
        height = image.height,
        scale_factor,
        left_start,
        new_width,
        "Shrinking image"
    );
    crop_pixels(image, left_start, 0, new_width, image.height)
}

/// Copy the pixel rectangle with top-left corner `(x, y)` and the given size.
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` if the rectangle is empty or
/// extends past the image bounds.
pub fn crop_pixels(
    image: &PixelGrid,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> TransformResult<PixelGrid> {
    ensure_well_formed(image)?;

    if width == 0 || height == 0 {
        return Err(TransformError::InvalidParameter(format!(
            "crop region must be non-empty, got {width}x{height}"
        )));
    }
    let right = x as u64 + width as u64;
    let bottom = y as u64 + height as u64;
    if right > image.width as u64 || bottom > image.height as u64 {
        return Err(TransformError::InvalidParameter(format!(
            "crop region {width}x{height}+{x}+{y} exceeds {}x{} image",
            image.width, image.height
        )));
    }

    let channels = image.channels as usize;
    let src_stride = image.row_stride();
    let dst_stride = width as usize * channels;
    let mut output = Vec::with_capacity(dst_stride * height as usize);

    // Copy pixel data row by row
    for row in y as usize..bottom as usize {
        let start = row * src_stride + x as usize * channels;
        output.extend_from_slice(&image.pixels[start..start + dst_stride]);
    }

    Ok(PixelGrid::new(width, height, image.channels, output))
}

pub(crate) fn ensure_well_formed(image: &PixelGrid) -> TransformResult<()> {
    if image.is_well_formed() {
        Ok(())
    } else {
        Err(TransformError::InvalidParameter(format!(
            "malformed pixel grid: {}x{} with {} channels and {} bytes",
            image.width,
            image.height,
            image.channels,
            image.pixels.len()
        )))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
