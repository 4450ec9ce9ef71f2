//! Image rotation with automatic canvas expansion.
//!
//! The output canvas is the bounding box of the source rectangle rotated
//! about its center, so no source content is clipped. Canvas areas that the
//! rotated source does not cover are padded with a fill value.
//!
//! # Algorithm
//!
//! Rotation uses inverse mapping over continuous coordinates, where pixel
//! `(i, j)` covers `[i, i + 1) x [j, j + 1)`:
//!
//! 1. Size the canvas: `out_w = round(H |sin θ| + W |cos θ|)`,
//!    `out_h = round(H |cos θ| + W |sin θ|)`.
//! 2. Build the rotation about the source center `(W / 2, H / 2)` and shift
//!    its translation by `(out_w / 2 - W / 2, out_h / 2 - H / 2)` so the
//!    pivot lands on the canvas center.
//! 3. For each output pixel center, map back through the inverse transform
//!    and sample the source there.
//!
//! Multiples of 90° are handled as exact pixel permutations.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::affine::AffineTransform;
use super::crop::ensure_well_formed;
use super::{TransformError, TransformResult};
use crate::decode::PixelGrid;

/// Angles closer than this (in degrees) to a multiple of 90° are treated as
/// exact quarter turns.
const RIGHT_ANGLE_TOLERANCE: f64 = 1e-9;

/// Interpolation filter for rotation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationFilter {
    /// Nearest neighbor - no new sample values are introduced.
    Nearest,
    /// Bilinear interpolation over the 4 nearest pixels.
    #[default]
    Bilinear,
    /// Lanczos3 interpolation over a 6x6 neighborhood.
    Lanczos3,
}

/// Options for [`apply_rotation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RotationOptions {
    /// Resampling filter.
    pub filter: InterpolationFilter,
    /// Sample value written to every channel of uncovered canvas pixels.
    pub fill: u8,
}

/// Number of counter-clockwise quarter turns if `angle_degrees` is a
/// multiple of 90°.
fn quarter_turns(angle_degrees: f64) -> Option<u32> {
    let normalized = angle_degrees.rem_euclid(360.0);
    let turns = (normalized / 90.0).round();
    if (normalized - turns * 90.0).abs() < RIGHT_ANGLE_TOLERANCE {
        Some(turns as u32 % 4)
    } else {
        None
    }
}

/// Compute the dimensions of the bounding box for a rotated image.
///
/// # Arguments
///
/// * `width` - Original image width
/// * `height` - Original image height
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise)
///
/// # Returns
///
/// Tuple of (new_width, new_height) for the rotated bounding box.
///
/// # Example
///
/// ```
/// use rotocrop_core::transform::compute_rotated_bounds;
///
/// // 90-degree rotation swaps dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Exact fast paths keep trig rounding from inflating the canvas
    match quarter_turns(angle_degrees) {
        Some(0) | Some(2) => return (width, height),
        Some(_) => return (height, width),
        None => {}
    }

    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());

    let w = width as f64;
    let h = height as f64;

    let new_w = (h * sin + w * cos).round() as u32;
    let new_h = (h * cos + w * sin).round() as u32;

    (new_w.max(1), new_h.max(1))
}

/// Build the forward transform from source to output canvas coordinates.
///
/// The rotation pivots about the source center and the translation is
/// re-centered on the expanded canvas returned by [`compute_rotated_bounds`].
pub fn rotation_transform(width: u32, height: u32, angle_degrees: f64) -> AffineTransform {
    let (out_w, out_h) = compute_rotated_bounds(width, height, angle_degrees);
    let center = (width as f64 / 2.0, height as f64 / 2.0);

    AffineTransform::rotation(center, angle_degrees, 1.0).translated(
        out_w as f64 / 2.0 - center.0,
        out_h as f64 / 2.0 - center.1,
    )
}

/// Rotate with the default options (bilinear, zero fill).
pub fn rotate(image: &PixelGrid, angle_degrees: f64) -> TransformResult<PixelGrid> {
    apply_rotation(image, angle_degrees, &RotationOptions::default())
}

/// Apply rotation to an image.
///
/// The image is rotated around its center. The output canvas is expanded
/// to fit the entire rotated image (no clipping).
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = counter-clockwise).
///   Any finite value is accepted; the angle is periodic in 360°.
/// * `options` - Interpolation filter and fill value
///
/// # Errors
///
/// Returns `TransformError::InvalidParameter` for a non-finite angle or a
/// malformed source grid.
pub fn apply_rotation(
    image: &PixelGrid,
    angle_degrees: f64,
    options: &RotationOptions,
) -> TransformResult<PixelGrid> {
    ensure_well_formed(image)?;
    if !angle_degrees.is_finite() {
        return Err(TransformError::InvalidParameter(format!(
            "rotation angle must be finite, got {angle_degrees}"
        )));
    }

    if let Some(turns) = quarter_turns(angle_degrees) {
        debug!(
            width = image.width,
            height = image.height,
            turns,
            "Rotating image by quarter turns"
        );
        return Ok(rotate_quarter_turns(image, turns));
    }

    let (dst_w, dst_h) = compute_rotated_bounds(image.width, image.height, angle_degrees);
    let inverse = rotation_transform(image.width, image.height, angle_degrees).invert()?;

    debug!(
        width = image.width,
        height = image.height,
        angle_degrees,
        dst_w,
        dst_h,
        filter = ?options.filter,
        "Rotating image"
    );

    let channels = image.channels as usize;
    let mut output = PixelGrid::filled(dst_w, dst_h, image.channels, options.fill);
    let stride = output.row_stride();

    for (dst_y, row) in output.pixels.chunks_exact_mut(stride).enumerate() {
        for (dst_x, out) in row.chunks_exact_mut(channels).enumerate() {
            // Sample at the output pixel center
            let (src_x, src_y) = inverse.apply(dst_x as f64 + 0.5, dst_y as f64 + 0.5);

            if !covers(image, src_x, src_y) {
                continue;
            }

            match options.filter {
                InterpolationFilter::Nearest => sample_nearest(image, src_x, src_y, out),
                InterpolationFilter::Bilinear => sample_bilinear(image, src_x, src_y, out),
                InterpolationFilter::Lanczos3 => sample_lanczos3(image, src_x, src_y, out),
            }
        }
    }

    Ok(output)
}

/// Exact counter-clockwise rotation by `turns` quarter turns.
fn rotate_quarter_turns(image: &PixelGrid, turns: u32) -> PixelGrid {
    if turns == 0 {
        return image.clone();
    }

    let (w, h) = (image.width, image.height);
    let (dst_w, dst_h) = if turns % 2 == 1 { (h, w) } else { (w, h) };

    let channels = image.channels as usize;
    let mut output = Vec::with_capacity(image.pixels.len());

    for y in 0..dst_h {
        for x in 0..dst_w {
            // Source pixel that lands on (x, y)
            let (sx, sy) = match turns {
                1 => (w - 1 - y, x),
                2 => (w - 1 - x, h - 1 - y),
                _ => (y, h - 1 - x),
            };
            output.extend_from_slice(image.pixel(sx, sy));
        }
    }

    debug_assert_eq!(output.len(), dst_w as usize * dst_h as usize * channels);
    PixelGrid::new(dst_w, dst_h, image.channels, output)
}

/// True when the continuous point lies inside the source rectangle.
#[inline]
fn covers(image: &PixelGrid, x: f64, y: f64) -> bool {
    x >= 0.0 && y >= 0.0 && x <= image.width as f64 && y <= image.height as f64
}

#[inline]
fn sample_index(image: &PixelGrid, px: usize, py: usize) -> usize {
    py * image.row_stride() + px * image.channels as usize
}

/// Sample the pixel containing the continuous point.
fn sample_nearest(image: &PixelGrid, x: f64, y: f64, out: &mut [u8]) {
    let px = (x.floor().max(0.0) as usize).min(image.width as usize - 1);
    let py = (y.floor().max(0.0) as usize).min(image.height as usize - 1);
    let idx = sample_index(image, px, py);
    out.copy_from_slice(&image.pixels[idx..idx + out.len()]);
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixel centers and weights
/// their contribution based on distance. Taps past the edge are clamped.
fn sample_bilinear(image: &PixelGrid, x: f64, y: f64, out: &mut [u8]) {
    let max_x = (image.width - 1) as f64;
    let max_y = (image.height - 1) as f64;

    // Continuous point to pixel-center space
    let u = (x - 0.5).clamp(0.0, max_x);
    let v = (y - 0.5).clamp(0.0, max_y);

    let x0 = u.floor() as usize;
    let y0 = v.floor() as usize;
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);

    // Fractional distances
    let fx = u - x0 as f64;
    let fy = v - y0 as f64;

    let i00 = sample_index(image, x0, y0);
    let i10 = sample_index(image, x1, y0);
    let i01 = sample_index(image, x0, y1);
    let i11 = sample_index(image, x1, y1);

    for (c, slot) in out.iter_mut().enumerate() {
        let p00 = image.pixels[i00 + c] as f64;
        let p10 = image.pixels[i10 + c] as f64;
        let p01 = image.pixels[i01 + c] as f64;
        let p11 = image.pixels[i11 + c] as f64;

        let value = p00 * (1.0 - fx) * (1.0 - fy)
            + p10 * fx * (1.0 - fy)
            + p01 * (1.0 - fx) * fy
            + p11 * fx * fy;
        *slot = value.clamp(0.0, 255.0).round() as u8;
    }
}

/// Sample a pixel using Lanczos3 interpolation.
///
/// Lanczos3 considers a 6x6 neighborhood of pixels, providing
/// higher quality results especially for sharp edges. Taps past the edge
/// are clamped to the nearest edge pixel.
fn sample_lanczos3(image: &PixelGrid, x: f64, y: f64, out: &mut [u8]) {
    let (w, h) = (image.width as i64, image.height as i64);
    let u = x - 0.5;
    let v = y - 0.5;
    let x0 = u.floor() as i64;
    let y0 = v.floor() as i64;

    let mut sum = [0.0f64; 4];
    let mut weight_sum = 0.0;

    for ky in -2..=3 {
        let py = y0 + ky;
        let wy = lanczos_weight(v - py as f64, 3.0);
        if wy == 0.0 {
            continue;
        }
        let cy = py.clamp(0, h - 1) as usize;

        for kx in -2..=3 {
            let px = x0 + kx;
            let weight = wy * lanczos_weight(u - px as f64, 3.0);
            if weight == 0.0 {
                continue;
            }
            let cx = px.clamp(0, w - 1) as usize;

            let idx = sample_index(image, cx, cy);
            for (c, acc) in sum.iter_mut().take(out.len()).enumerate() {
                *acc += image.pixels[idx + c] as f64 * weight;
            }
            weight_sum += weight;
        }
    }

    if weight_sum.abs() > f64::EPSILON {
        for (slot, acc) in out.iter_mut().zip(sum.iter()) {
            *slot = (acc / weight_sum).clamp(0.0, 255.0).round() as u8;
        }
    } else {
        sample_bilinear(image, x, y, out);
    }
}

/// Lanczos kernel weight function.
///
/// ```text
/// L(x) = sinc(x) * sinc(x/a)  for |x| < a
/// L(x) = 0                     for |x| >= a
/// ```
///
/// where sinc(x) = sin(πx) / (πx)
fn lanczos_weight(x: f64, a: f64) -> f64 {
    if x.abs() < f64::EPSILON {
        return 1.0;
    }
    if x.abs() >= a {
        return 0.0;
    }

    let pi_x = std::f64::consts::PI * x;
    let pi_x_a = pi_x / a;

    (a * pi_x.sin() * pi_x_a.sin()) / (pi_x * pi_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a simple test image with a gradient pattern.
    fn test_image(width: u32, height: u32) -> PixelGrid {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((x + y) * 8) as u8;
                pixels.push(v); // R
                pixels.push(v); // G
                pixels.push(v); // B
            }
        }
        PixelGrid::new(width, height, 3, pixels)
    }

    /// Image where each pixel is unique: (x, y, x ^ y).
    fn unique_image(width: u32, height: u32) -> PixelGrid {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(x as u8);
                pixels.push(y as u8);
                pixels.push((x ^ y) as u8);
            }
        }
        PixelGrid::new(width, height, 3, pixels)
    }

    fn bilinear() -> RotationOptions {
        RotationOptions::default()
    }

    #[test]
    fn test_no_rotation() {
        let img = test_image(100, 50);
        let result = rotate(&img, 0.0).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_full_rotation_is_identity() {
        let img = unique_image(17, 9);
        assert_eq!(rotate(&img, 360.0).unwrap(), img);
        assert_eq!(rotate(&img, -720.0).unwrap(), img);
    }

    #[test]
    fn test_90_degree_rotation_bounds() {
        assert_eq!(compute_rotated_bounds(100, 50, 90.0), (50, 100));
    }

    #[test]
    fn test_180_degree_rotation_bounds() {
        assert_eq!(compute_rotated_bounds(100, 50, 180.0), (100, 50));
    }

    #[test]
    fn test_270_degree_rotation_bounds() {
        // 270 degrees is same as -90, should swap dimensions
        assert_eq!(compute_rotated_bounds(100, 50, 270.0), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, -90.0), (50, 100));
    }

    #[test]
    fn test_45_degree_rotation_bounds() {
        // 100 * (sqrt(2)/2 + sqrt(2)/2) = 141.42
        assert_eq!(compute_rotated_bounds(100, 100, 45.0), (141, 141));
    }

    #[test]
    fn test_large_rotation_angles() {
        // 720 degrees = 2 full rotations
        assert_eq!(compute_rotated_bounds(100, 50, 720.0), (100, 50));
        // 450 degrees = 360 + 90
        assert_eq!(compute_rotated_bounds(100, 50, 450.0), (50, 100));
    }

    #[test]
    fn test_opposite_rotations_same_bounds() {
        assert_eq!(
            compute_rotated_bounds(100, 80, 30.0),
            compute_rotated_bounds(100, 80, -30.0)
        );
    }

    #[test]
    fn test_complementary_rotations() {
        // 30 and 150 share |sin| and |cos|
        assert_eq!(
            compute_rotated_bounds(100, 50, 30.0),
            compute_rotated_bounds(100, 50, 150.0)
        );
    }

    #[test]
    fn test_bounds_never_zero() {
        for angle in [1.0, 15.0, 45.0, 89.0, 90.0, 135.0, 179.0, 180.0, 270.0, 359.0] {
            let (w, h) = compute_rotated_bounds(1, 1, angle);
            assert!(w > 0, "Width should be > 0 for angle {}", angle);
            assert!(h > 0, "Height should be > 0 for angle {}", angle);
        }
    }

    #[test]
    fn test_rotation_transform_maps_center_to_canvas_center() {
        for angle in [10.0, 45.0, 123.0, -33.0] {
            let t = rotation_transform(120, 80, angle);
            let (out_w, out_h) = compute_rotated_bounds(120, 80, angle);
            let (cx, cy) = t.apply(60.0, 40.0);
            assert!((cx - out_w as f64 / 2.0).abs() < 1e-9);
            assert!((cy - out_h as f64 / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rotation_transform_keeps_corners_on_canvas() {
        let (w, h) = (120u32, 80u32);
        for angle in [10.0, 45.0, 123.0, 200.0, -33.0] {
            let t = rotation_transform(w, h, angle);
            let (out_w, out_h) = compute_rotated_bounds(w, h, angle);
            for (x, y) in [(0.0, 0.0), (w as f64, 0.0), (0.0, h as f64), (w as f64, h as f64)] {
                let (px, py) = t.apply(x, y);
                // Rounding the canvas size can shave at most half a pixel per side
                assert!(px >= -0.5 && px <= out_w as f64 + 0.5, "x {} for angle {}", px, angle);
                assert!(py >= -0.5 && py <= out_h as f64 + 0.5, "y {} for angle {}", py, angle);
            }
        }
    }

    #[test]
    fn test_90_degree_rotation_is_counter_clockwise() {
        let img = unique_image(4, 3);
        let result = rotate(&img, 90.0).unwrap();

        assert_eq!((result.width, result.height), (3, 4));
        // Top-right source pixel becomes top-left
        assert_eq!(result.pixel(0, 0), img.pixel(3, 0));
        // Top-left source pixel becomes bottom-left
        assert_eq!(result.pixel(0, 3), img.pixel(0, 0));
        // Bottom-right source pixel becomes top-right
        assert_eq!(result.pixel(2, 0), img.pixel(3, 2));
    }

    #[test]
    fn test_180_degree_rotation() {
        let img = unique_image(5, 3);
        let result = rotate(&img, 180.0).unwrap();

        assert_eq!(result.pixel(0, 0), img.pixel(4, 2));
        assert_eq!(result.pixel(4, 2), img.pixel(0, 0));
    }

    #[test]
    fn test_90_then_270_restores_image() {
        let img = unique_image(13, 7);
        let there = rotate(&img, 90.0).unwrap();
        let back = rotate(&there, 270.0).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_general_path_agrees_with_quarter_turn() {
        // Just outside the right-angle tolerance, nearest sampling must land
        // on the same pixels as the exact permutation.
        let img = unique_image(11, 6);
        let options = RotationOptions {
            filter: InterpolationFilter::Nearest,
            fill: 0,
        };
        let general = apply_rotation(&img, 90.0 + 1e-6, &options).unwrap();
        let exact = rotate(&img, 90.0).unwrap();
        assert_eq!(general, exact);
    }

    #[test]
    fn test_rectangular_image_rotation() {
        let img = test_image(200, 100);
        let result = rotate(&img, 90.0).unwrap();
        assert_eq!(result.width, 100);
        assert_eq!(result.height, 200);
    }

    #[test]
    fn test_rotation_expands_canvas() {
        let img = test_image(100, 100);
        let result = rotate(&img, 45.0).unwrap();

        assert_eq!((result.width, result.height), (141, 141));
        assert_eq!(result.pixels.len(), 141 * 141 * 3);
    }

    #[test]
    fn test_negative_rotation() {
        let img = test_image(100, 100);
        let result = rotate(&img, -45.0).unwrap();
        assert!(result.width > img.width);
        assert!(result.height > img.height);
    }

    #[test]
    fn test_corners_use_fill_value() {
        let img = PixelGrid::filled(40, 40, 3, 255);
        let options = RotationOptions {
            filter: InterpolationFilter::Bilinear,
            fill: 7,
        };
        let result = apply_rotation(&img, 45.0, &options).unwrap();

        assert_eq!(result.pixel(0, 0), &[7, 7, 7]);
        assert_eq!(result.pixel(result.width - 1, result.height - 1), &[7, 7, 7]);
        // Interior is fully covered by the source
        assert_eq!(result.pixel(result.width / 2, result.height / 2), &[255, 255, 255]);
    }

    #[test]
    fn test_rotation_keeps_channels() {
        let img = PixelGrid::filled(10, 6, 2, 50);
        let result = rotate(&img, 30.0).unwrap();
        assert_eq!(result.channels, 2);
        assert_eq!(
            result.pixels.len(),
            (result.width * result.height * 2) as usize
        );
    }

    #[test]
    fn test_rotation_center_preservation() {
        // Bright 3x3 block at the center should stay near the canvas center
        let size = 21;
        let mut img = PixelGrid::filled(size, size, 3, 0);
        let center = size / 2;
        for y in center - 1..=center + 1 {
            for x in center - 1..=center + 1 {
                let idx = sample_index(&img, x as usize, y as usize);
                img.pixels[idx..idx + 3].copy_from_slice(&[255, 255, 255]);
            }
        }

        let result = rotate(&img, 30.0).unwrap();
        let (cx, cy) = (result.width / 2, result.height / 2);
        let mut found_bright = false;
        for y in cy - 1..=cy + 1 {
            for x in cx - 1..=cx + 1 {
                if result.pixel(x, y)[0] > 200 {
                    found_bright = true;
                }
            }
        }
        assert!(
            found_bright,
            "Center region should contain bright pixels after rotation"
        );
    }

    #[test]
    fn test_bilinear_vs_lanczos() {
        let img = test_image(50, 50);

        let bilinear = apply_rotation(&img, 15.0, &bilinear()).unwrap();
        let lanczos = apply_rotation(
            &img,
            15.0,
            &RotationOptions {
                filter: InterpolationFilter::Lanczos3,
                fill: 0,
            },
        )
        .unwrap();

        // Same dimensions regardless of filter
        assert_eq!(bilinear.width, lanczos.width);
        assert_eq!(bilinear.height, lanczos.height);
    }

    #[test]
    fn test_lanczos_uniform_image_stays_uniform() {
        let img = PixelGrid::filled(30, 30, 1, 120);
        let options = RotationOptions {
            filter: InterpolationFilter::Lanczos3,
            fill: 0,
        };
        let result = apply_rotation(&img, 20.0, &options).unwrap();
        assert_eq!(result.pixel(result.width / 2, result.height / 2), &[120]);
    }

    #[test]
    fn test_small_image_rotation() {
        let img = test_image(4, 4);
        let result = rotate(&img, 30.0).unwrap();
        assert!(result.width > 0);
        assert!(result.height > 0);
    }

    #[test]
    fn test_1x1_image_rotation() {
        let img = PixelGrid::new(1, 1, 3, vec![128, 128, 128]);
        let result = rotate(&img, 45.0).unwrap();
        assert!(result.width >= 1);
        assert!(result.height >= 1);
    }

    #[test]
    fn test_very_thin_image_rotation() {
        let img = test_image(100, 1);
        let result = rotate(&img, 45.0).unwrap();
        assert_eq!(
            (result.width, result.height),
            compute_rotated_bounds(100, 1, 45.0)
        );
    }

    #[test]
    fn test_non_finite_angle_rejected() {
        let img = test_image(10, 10);
        assert!(matches!(
            rotate(&img, f64::NAN),
            Err(TransformError::InvalidParameter(_))
        ));
        assert!(rotate(&img, f64::INFINITY).is_err());
    }

    #[test]
    fn test_malformed_grid_rejected() {
        let img = PixelGrid {
            width: 3,
            height: 3,
            channels: 3,
            pixels: vec![0; 4],
        };
        assert!(rotate(&img, 10.0).is_err());
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(quarter_turns(0.0), Some(0));
        assert_eq!(quarter_turns(90.0), Some(1));
        assert_eq!(quarter_turns(-90.0), Some(3));
        assert_eq!(quarter_turns(540.0), Some(2));
        assert_eq!(quarter_turns(359.9999999999999), Some(0));
        assert_eq!(quarter_turns(45.0), None);
        assert_eq!(quarter_turns(90.001), None);
    }

    #[test]
    fn test_lanczos_weight_at_zero() {
        assert!((lanczos_weight(0.0, 3.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lanczos_weight_at_boundary() {
        assert!(lanczos_weight(3.0, 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lanczos_weight_symmetry() {
        let w1 = lanczos_weight(1.5, 3.0);
        let w2 = lanczos_weight(-1.5, 3.0);
        assert!((w1 - w2).abs() < 1e-10);
    }

    #[test]
    fn test_filter_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            filter: InterpolationFilter,
        }
        let parsed: Wrapper = toml::from_str("filter = \"lanczos3\"").unwrap();
        assert_eq!(parsed.filter, InterpolationFilter::Lanczos3);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
