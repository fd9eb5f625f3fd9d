use crate::math::*;
use crate::pixel::*;

///
/// A sprite is a bitmap with a placement in the scene
///
/// The position is the geometric centre of the sprite in scene coordinates. The transform that maps the sprite's
/// pixels into the scene is cached, and the cache is marked as stale whenever the position, rotation or scale changes.
///
#[derive(Clone, Debug)]
pub struct Sprite {
    /// The pixels for this sprite (the size of this never changes)
    texture: RgbaTexture,

    /// Geometric centre of the sprite, in scene coordinates
    position: Vector2,

    /// Rotation in radians
    rotation: f64,

    /// Scale factors along the sprite's own x and y axes
    scale: Vector2,

    /// Draw order: sprites with lower z-indexes are drawn behind sprites with higher ones
    z_index: i32,

    /// The cached forward transform (only valid while `transform_stale` is false)
    transform: Transform2D,

    /// The inverse of the cached transform, or None if the transform can't be inverted
    inverse: Option<Transform2D>,

    /// Set when `transform` and `inverse` need to be recalculated
    transform_stale: bool,
}

impl Sprite {
    ///
    /// Creates a sprite at the origin with no rotation or scaling
    ///
    pub fn new(texture: RgbaTexture) -> Sprite {
        Sprite {
            texture:            texture,
            position:           Vector2::zero(),
            rotation:           0.0,
            scale:              Vector2::one(),
            z_index:            0,
            transform:          Transform2D::identity(),
            inverse:            None,
            transform_stale:    true,
        }
    }

    #[inline] pub fn texture(&self) -> &RgbaTexture   { &self.texture }
    #[inline] pub fn width(&self) -> usize            { self.texture.width() }
    #[inline] pub fn height(&self) -> usize           { self.texture.height() }
    #[inline] pub fn position(&self) -> Vector2       { self.position }
    #[inline] pub fn rotation(&self) -> f64           { self.rotation }
    #[inline] pub fn scale(&self) -> Vector2          { self.scale }
    #[inline] pub fn z_index(&self) -> i32            { self.z_index }

    ///
    /// The size of this sprite after scaling is applied (ignoring rotation)
    ///
    pub fn scaled_size(&self) -> (u32, u32) {
        (
            (self.width() as f64 * self.scale.x.abs()) as u32,
            (self.height() as f64 * self.scale.y.abs()) as u32,
        )
    }

    #[inline]
    pub fn set_position(&mut self, position: Vector2) {
        self.position           = position;
        self.transform_stale    = true;
    }

    ///
    /// Moves the sprite relative to its current position
    ///
    #[inline]
    pub fn translate(&mut self, offset: Vector2) {
        self.set_position(self.position + offset);
    }

    #[inline]
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation           = radians;
        self.transform_stale    = true;
    }

    ///
    /// Adds to the current rotation, keeping the result in the range `[0, 2π)`
    ///
    pub fn rotate(&mut self, radians: f64) {
        self.set_rotation(normalize_radians(self.rotation + radians));
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Vector2) {
        self.scale              = scale;
        self.transform_stale    = true;
    }

    ///
    /// Multiplies the current scale factors
    ///
    #[inline]
    pub fn scale_by(&mut self, factor: Vector2) {
        self.set_scale(self.scale.component_mul(factor));
    }

    ///
    /// Sets the rotation and the scale in one step
    ///
    #[inline]
    pub fn apply_transform(&mut self, radians: f64, scale: Vector2) {
        self.rotation           = radians;
        self.scale              = scale;
        self.transform_stale    = true;
    }

    ///
    /// Sets the rotation back to 0 and the scale back to (1, 1), leaving the position as it is
    ///
    #[inline]
    pub fn reset_transform(&mut self) {
        self.apply_transform(0.0, Vector2::one());
    }

    ///
    /// Changes the z-index (this affects the drawing order but not the transform)
    ///
    #[inline]
    pub fn set_z_index(&mut self, z_index: i32) {
        self.z_index = z_index;
    }

    ///
    /// True if the cached transform needs to be recalculated
    ///
    #[inline]
    pub fn is_transform_stale(&self) -> bool {
        self.transform_stale
    }

    ///
    /// Calculates the transform for this sprite from its current position, rotation and scale
    ///
    /// This maps offsets from the sprite's centre into scene coordinates
    ///
    #[inline]
    pub fn transform_matrix(&self) -> Transform2D {
        Transform2D::sprite_transform(self.position, self.rotation, self.scale)
    }

    ///
    /// Returns the cached transform, or None if it's stale
    ///
    #[inline]
    pub fn cached_transform(&self) -> Option<Transform2D> {
        if self.transform_stale {
            None
        } else {
            Some(self.transform)
        }
    }

    ///
    /// Returns the cached inverse transform, or None if it's stale or the transform is not invertible
    ///
    #[inline]
    pub fn cached_inverse(&self) -> Option<Transform2D> {
        if self.transform_stale {
            None
        } else {
            self.inverse
        }
    }

    ///
    /// Recalculates the cached transform if it's stale, then returns it
    ///
    pub fn refresh_transform(&mut self) -> Transform2D {
        if self.transform_stale {
            self.transform          = self.transform_matrix();
            self.inverse            = self.transform.invert();
            self.transform_stale    = false;
        }

        self.transform
    }
}
