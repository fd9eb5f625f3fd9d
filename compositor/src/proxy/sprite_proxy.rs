use super::dirty_flags::*;

use crate::engine::*;
use crate::error::*;
use crate::math::*;
use crate::sprite::*;

use tracing::{trace};

///
/// A host-side copy of a sprite's placement, which only sends the values that have changed to the engine
///
/// Changes are made to the proxy and then sent in a batch with `sync()`. The rotation and scale are only sent when
/// one of them has actually changed: this saves recalculating the sprite's transform for updates that only move it.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteProxy {
    handle:     SpriteHandle,
    position:   Vector2,
    rotation:   f64,
    scale:      Vector2,
    z_index:    i32,
    dirty:      DirtyFlags,
}

impl SpriteProxy {
    ///
    /// Creates a proxy for a sprite that still has its initial placement (at the origin, unrotated and unscaled)
    ///
    pub fn new(handle: SpriteHandle) -> SpriteProxy {
        SpriteProxy {
            handle:     handle,
            position:   Vector2::zero(),
            rotation:   0.0,
            scale:      Vector2::one(),
            z_index:    0,
            dirty:      DirtyFlags::empty(),
        }
    }

    ///
    /// Creates a proxy that mirrors the current state of a sprite in an engine
    ///
    pub fn from_engine(engine: &Engine, handle: SpriteHandle) -> Result<SpriteProxy> {
        let sprite = engine.sprite(handle)?;

        Ok(SpriteProxy {
            handle:     handle,
            position:   sprite.position(),
            rotation:   sprite.rotation(),
            scale:      sprite.scale(),
            z_index:    sprite.z_index(),
            dirty:      DirtyFlags::empty(),
        })
    }

    #[inline] pub fn handle(&self) -> SpriteHandle    { self.handle }
    #[inline] pub fn position(&self) -> Vector2       { self.position }
    #[inline] pub fn rotation(&self) -> f64           { self.rotation }
    #[inline] pub fn scale(&self) -> Vector2          { self.scale }
    #[inline] pub fn z_index(&self) -> i32            { self.z_index }
    #[inline] pub fn dirty(&self) -> DirtyFlags       { self.dirty }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        let position = Vector2::new(x, y);

        if position != self.position {
            self.position = position;
            self.dirty.insert(DirtyFlags::POSITION);
        }
    }

    #[inline]
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.set_position(self.position.x + dx, self.position.y + dy);
    }

    pub fn set_rotation(&mut self, radians: f64) {
        if radians != self.rotation {
            self.rotation = radians;
            self.dirty.insert(DirtyFlags::TRANSFORM);
        }
    }

    ///
    /// Adds to the rotation, keeping it in the range `[0, 2π)` the same way the engine does
    ///
    #[inline]
    pub fn rotate(&mut self, radians: f64) {
        self.set_rotation(normalize_radians(self.rotation + radians));
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        let scale = Vector2::new(scale_x, scale_y);

        if scale != self.scale {
            self.scale = scale;
            self.dirty.insert(DirtyFlags::TRANSFORM);
        }
    }

    pub fn set_z_index(&mut self, z_index: i32) {
        if z_index != self.z_index {
            self.z_index = z_index;
            self.dirty.insert(DirtyFlags::Z_INDEX);
        }
    }

    ///
    /// Sets the rotation back to 0 and the scale back to (1, 1)
    ///
    pub fn reset_transform(&mut self) {
        self.set_rotation(0.0);
        self.set_scale(1.0, 1.0);
    }

    ///
    /// Marks everything as changed, so the next `sync()` sends the whole state
    ///
    pub fn mark_all_dirty(&mut self) {
        self.dirty = DirtyFlags::all();
    }

    ///
    /// Sends any changes to the engine, returning the set of values that were sent
    ///
    /// If the engine rejects an update (for example because the sprite has been removed), the changes are kept so
    /// that they are sent again by the next call.
    ///
    pub fn sync(&mut self, engine: &mut Engine) -> Result<DirtyFlags> {
        let dirty = self.dirty;

        if dirty.contains(DirtyFlags::POSITION) {
            engine.set_sprite_position(self.handle, self.position.x, self.position.y)?;
        }

        if dirty.contains(DirtyFlags::Z_INDEX) {
            engine.set_sprite_z_index(self.handle, self.z_index)?;
        }

        if dirty.contains(DirtyFlags::TRANSFORM) {
            engine.apply_sprite_transform(self.handle, self.rotation, self.scale.x, self.scale.y)?;
        }

        if !dirty.is_empty() {
            trace!(handle = ?self.handle, ?dirty, "Synchronised sprite proxy");
        }

        self.dirty = DirtyFlags::empty();

        Ok(dirty)
    }
}
