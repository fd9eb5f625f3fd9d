use super::vector2::*;

use std::ops::*;

///
/// Smallest determinant that is treated as invertible
///
const MIN_DETERMINANT: f64 = 1e-12;

///
/// Wraps an angle in radians into the range `[0, 2π)`
///
#[inline]
pub fn normalize_radians(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(std::f64::consts::TAU);

    // rem_euclid can round up to exactly TAU for tiny negative values
    if wrapped >= std::f64::consts::TAU { 0.0 } else { wrapped }
}

///
/// A 2D affine transformation, stored as a row-major 3x3 matrix
///
/// ```text
/// | a  b  c |
/// | d  e  f |
/// | 0  0  1 |
/// ```
///
/// Points are transformed as column vectors, so `(A * B).transform_point(p)` applies `B` first and then `A`.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Transform2D {
    ///
    /// The identity transform
    ///
    #[inline]
    pub const fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a translation transform
    ///
    #[inline]
    pub const fn translate(x: f64, y: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a scaling transform (around the origin)
    ///
    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Creates a rotation transform (around the origin). With y pointing down, positive angles rotate clockwise on screen.
    ///
    #[inline]
    pub fn rotate_radians(radians: f64) -> Transform2D {
        let (sin, cos) = radians.sin_cos();

        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// The transform that places a sprite in the scene: `Translate(position) · Rotate(rotation) · Scale(scale)`
    ///
    /// A point at offset `(u, v)` from the sprite's centre maps to `position + R(rotation)·(scale.x·u, scale.y·v)`
    ///
    #[inline]
    pub fn sprite_transform(position: Vector2, rotation: f64, scale: Vector2) -> Transform2D {
        Self::translate(position.x, position.y) * Self::rotate_radians(rotation) * Self::scale(scale.x, scale.y)
    }

    ///
    /// The determinant of the linear part of this transform
    ///
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [[a, b, _], [d, e, _], _] = self.0;

        a*e - b*d
    }

    ///
    /// Inverts this transform, or returns None if it collapses the plane onto a line or a point
    ///
    pub fn invert(&self) -> Option<Transform2D> {
        let [[a, b, c], [d, e, f], _] = self.0;

        let det = self.determinant();
        if det.abs() < MIN_DETERMINANT || !det.is_finite() {
            return None;
        }

        // Invert the linear part, then move the translation through it
        let inv_a   = e / det;
        let inv_b   = -b / det;
        let inv_d   = -d / det;
        let inv_e   = a / det;

        let inv_c   = -(inv_a*c + inv_b*f);
        let inv_f   = -(inv_d*c + inv_e*f);

        Some(Transform2D([[inv_a, inv_b, inv_c], [inv_d, inv_e, inv_f], [0.0, 0.0, 1.0]]))
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let [[a, b, c], [d, e, f], _] = self.0;

        (a*x + b*y + c, d*x + e*y + f)
    }

    ///
    /// Applies the linear part of this transform to a vector (translation is ignored)
    ///
    #[inline]
    pub fn transform_vector(&self, vector: Vector2) -> Vector2 {
        let [[a, b, _], [d, e, _], _] = self.0;

        Vector2::new(a*vector.x + b*vector.y, d*vector.x + e*vector.y)
    }
}

impl Default for Transform2D {
    #[inline]
    fn default() -> Self {
        Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    fn mul(self, other: Transform2D) -> Transform2D {
        let a = &self.0;
        let b = &other.0;
        let mut result = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0]*b[0][col] + a[row][1]*b[1][col] + a[row][2]*b[2][col];
            }
        }

        Transform2D(result)
    }
}
