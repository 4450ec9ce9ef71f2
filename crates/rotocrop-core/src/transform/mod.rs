//! Geometric transforms: horizontal shrink and rotation.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, y grows downward
//! - Rotation angles are in degrees, positive = counter-clockwise on screen
//! - Pixel `(i, j)` covers the unit square `[i, i + 1) x [j, j + 1)`, so the
//!   center of a `W x H` image is `(W / 2, H / 2)`

mod affine;
mod crop;
mod error;
mod rotation;

pub use affine::AffineTransform;
pub use crop::{crop_pixels, shrink, shrink_span};
pub use error::{TransformError, TransformResult};
pub use rotation::{
    apply_rotation, compute_rotated_bounds, rotate, rotation_transform, InterpolationFilter,
    RotationOptions,
};
