//! 2x3 affine transforms for mapping between pixel coordinate spaces.

use super::{TransformError, TransformResult};

/// A 2x3 affine matrix.
///
/// Maps a point `(x, y)` to:
/// ```text
/// x' = m[0][0] * x + m[0][1] * y + m[0][2]
/// y' = m[1][0] * x + m[1][1] * y + m[1][2]
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub m: [[f64; 3]; 2],
}

impl AffineTransform {
    /// Rotation by `angle_degrees` about `center`, followed by uniform `scale`.
    ///
    /// Positive angles rotate counter-clockwise as seen on screen (y axis
    /// pointing down). The layout matches the classic `getRotationMatrix2D`:
    /// ```text
    /// [  a  b  (1 - a) * cx - b * cy ]
    /// [ -b  a  b * cx + (1 - a) * cy ]
    /// ```
    /// with `a = scale * cos(angle)` and `b = scale * sin(angle)`.
    pub fn rotation(center: (f64, f64), angle_degrees: f64, scale: f64) -> Self {
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let a = scale * cos;
        let b = scale * sin;
        let (cx, cy) = center;

        Self {
            m: [
                [a, b, (1.0 - a) * cx - b * cy],
                [-b, a, b * cx + (1.0 - a) * cy],
            ],
        }
    }

    /// Shift the output of this transform by `(dx, dy)`.
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.m[0][2] += dx;
        self.m[1][2] += dy;
        self
    }

    /// Map a point through the transform.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let m = &self.m;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }

    /// Inverse transform.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SingularMatrix` when the linear part has a
    /// zero determinant.
    pub fn invert(&self) -> TransformResult<Self> {
        let [[a, b, tx], [c, d, ty]] = self.m;
        let det = a * d - b * c;
        if det.abs() < 1e-12 || !det.is_finite() {
            return Err(TransformError::SingularMatrix);
        }

        let inv_a = d / det;
        let inv_b = -b / det;
        let inv_c = -c / det;
        let inv_d = a / det;

        Ok(Self {
            m: [
                [inv_a, inv_b, -(inv_a * tx + inv_b * ty)],
                [inv_c, inv_d, -(inv_c * tx + inv_d * ty)],
            ],
        })
    }
}
