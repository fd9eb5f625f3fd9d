use std::ops::*;

///
/// A 2D vector or point, in scene or sprite coordinates
///
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Vector2 { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn one() -> Self {
        Vector2 { x: 1.0, y: 1.0 }
    }

    ///
    /// Multiplies each component of this vector by the corresponding component of another (used for non-uniform scaling)
    ///
    #[inline]
    pub fn component_mul(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x * other.x, self.y * other.y)
    }

    ///
    /// Rotates this vector around the origin (positive angles rotate from +x towards +y)
    ///
    #[inline]
    pub fn rotate(self, radians: f64) -> Vector2 {
        let (sin, cos) = radians.sin_cos();

        Vector2::new(self.x*cos - self.y*sin, self.x*sin + self.y*cos)
    }

    #[inline]
    pub fn dot(self, other: Vector2) -> f64 {
        self.x*other.x + self.y*other.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl From<(f64, f64)> for Vector2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Vector2 {
        Vector2::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    #[inline]
    fn from(vector: Vector2) -> (f64, f64) {
        (vector.x, vector.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, other: Vector2) -> Vector2 { Vector2::new(self.x + other.x, self.y + other.y) }
}

impl Sub for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, other: Vector2) -> Vector2 { Vector2::new(self.x - other.x, self.y - other.y) }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 { Vector2::new(-self.x, -self.y) }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, factor: f64) -> Vector2 { Vector2::new(self.x * factor, self.y * factor) }
}
