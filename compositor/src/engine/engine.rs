use super::config::*;

use crate::error::*;
use crate::math::*;
use crate::pixel::*;
use crate::render::*;
use crate::sample::*;
use crate::scene::*;
use crate::sprite::*;

use tracing::{info};

///
/// A sprite compositing engine
///
/// The engine owns every sprite, the set of sprites that are currently visible and the frame buffer that they are
/// composited into. Every operation runs to completion before returning, and an operation that fails leaves the
/// engine exactly as it was.
///
/// Scene coordinate `(0, 0)` is the centre of the frame buffer, with x increasing to the right and y increasing
/// downwards.
///
#[derive(Clone, Debug)]
pub struct Engine {
    /// The sprites that have been created
    store: SpriteStore,

    /// The sprites that are drawn by `render()`
    scene: Scene,

    /// The frame buffer and rendering settings
    compositor: Compositor,
}

impl Engine {
    ///
    /// Creates an engine with a frame buffer of the specified size, an opaque black background and nearest sampling
    ///
    pub fn new(width: u32, height: u32) -> Result<Engine> {
        Self::with_config(EngineConfig::with_size(width, height))
    }

    ///
    /// Creates an engine from a configuration
    ///
    pub fn with_config(config: EngineConfig) -> Result<Engine> {
        let compositor = Compositor::new(config.width, config.height, config.background_pixel(), config.sampling_method)?;

        info!(width = config.width, height = config.height, sampling_method = ?config.sampling_method, "Created compositing engine");

        Ok(Engine {
            store:      SpriteStore::new(),
            scene:      Scene::new(),
            compositor: compositor,
        })
    }

    ///
    /// Reallocates the frame buffer at a new size
    ///
    /// Sprites are not affected. Any pointer previously returned by `frame_buffer_ptr()` is no longer valid after this call.
    ///
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.compositor.resize(width, height)?;

        info!(width, height, "Resized frame buffer");

        Ok(())
    }

    #[inline] pub fn scene_width(&self) -> u32     { self.compositor.frame_buffer().width() as u32 }
    #[inline] pub fn scene_height(&self) -> u32    { self.compositor.frame_buffer().height() as u32 }

    ///
    /// Creates a sprite from non-premultiplied RGBA pixels (`width * height * 4` bytes, rows starting at the top-left)
    ///
    pub fn create_sprite(&mut self, pixels: impl Into<Vec<u8>>, width: u32, height: u32) -> Result<SpriteHandle> {
        self.store.create(pixels.into(), width, height)
    }

    ///
    /// Creates a sprite filled with a single colour
    ///
    pub fn create_rect_sprite(&mut self, width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> Result<SpriteHandle> {
        self.store.create_rect(width, height, U8RgbaPixel::rgba(r, g, b, a))
    }

    ///
    /// Removes a sprite (taking it out of the scene if it's there) and releases its pixels
    ///
    pub fn remove_sprite(&mut self, handle: SpriteHandle) -> Result<()> {
        self.store.remove(handle)?;
        self.scene.remove(handle);

        Ok(())
    }

    ///
    /// The number of sprites that currently exist (whether or not they're in the scene)
    ///
    #[inline]
    pub fn sprite_count(&self) -> usize {
        self.store.len()
    }

    ///
    /// Makes a sprite visible. Adding a sprite that's already in the scene does nothing.
    ///
    pub fn add_to_scene(&mut self, handle: SpriteHandle) -> Result<()> {
        self.scene.add(&self.store, handle)
    }

    ///
    /// Hides a sprite. Removing a sprite that isn't in the scene does nothing.
    ///
    pub fn remove_from_scene(&mut self, handle: SpriteHandle) {
        self.scene.remove(handle);
    }

    #[inline]
    pub fn is_in_scene(&self, handle: SpriteHandle) -> bool {
        self.scene.contains(handle)
    }

    ///
    /// The sprites in the scene, in the order they'll be drawn (back to front)
    ///
    pub fn draw_order(&self) -> SceneOrder {
        self.scene.ordered_visible(&self.store)
    }

    ///
    /// Retrieves a sprite
    ///
    #[inline]
    pub fn sprite(&self, handle: SpriteHandle) -> Result<&Sprite> {
        self.store.get(handle)
    }

    pub fn set_sprite_position(&mut self, handle: SpriteHandle, x: f64, y: f64) -> Result<()> {
        self.store.get_mut(handle)?.set_position(Vector2::new(x, y));
        Ok(())
    }

    pub fn set_sprite_rotation(&mut self, handle: SpriteHandle, radians: f64) -> Result<()> {
        self.store.get_mut(handle)?.set_rotation(radians);
        Ok(())
    }

    pub fn set_sprite_scale(&mut self, handle: SpriteHandle, scale_x: f64, scale_y: f64) -> Result<()> {
        self.store.get_mut(handle)?.set_scale(Vector2::new(scale_x, scale_y));
        Ok(())
    }

    ///
    /// Changes where a sprite is in the drawing order (higher z-indexes are drawn in front)
    ///
    pub fn set_sprite_z_index(&mut self, handle: SpriteHandle, z_index: i32) -> Result<()> {
        self.store.get_mut(handle)?.set_z_index(z_index);
        Ok(())
    }

    ///
    /// Sets the rotation and scale of a sprite in one update
    ///
    pub fn apply_sprite_transform(&mut self, handle: SpriteHandle, radians: f64, scale_x: f64, scale_y: f64) -> Result<()> {
        self.store.get_mut(handle)?.apply_transform(radians, Vector2::new(scale_x, scale_y));
        Ok(())
    }

    ///
    /// Sets a sprite's rotation to 0 and its scale to (1, 1)
    ///
    pub fn reset_sprite_transform(&mut self, handle: SpriteHandle) -> Result<()> {
        self.store.get_mut(handle)?.reset_transform();
        Ok(())
    }

    ///
    /// Moves a sprite relative to its current position
    ///
    pub fn translate_sprite(&mut self, handle: SpriteHandle, dx: f64, dy: f64) -> Result<()> {
        self.store.get_mut(handle)?.translate(Vector2::new(dx, dy));
        Ok(())
    }

    ///
    /// Adds to a sprite's rotation (the result is kept in the range `[0, 2π)`)
    ///
    pub fn rotate_sprite(&mut self, handle: SpriteHandle, radians: f64) -> Result<()> {
        self.store.get_mut(handle)?.rotate(radians);
        Ok(())
    }

    ///
    /// Multiplies a sprite's current scale factors
    ///
    pub fn scale_sprite(&mut self, handle: SpriteHandle, scale_x: f64, scale_y: f64) -> Result<()> {
        self.store.get_mut(handle)?.scale_by(Vector2::new(scale_x, scale_y));
        Ok(())
    }

    #[inline] pub fn sprite_position(&self, handle: SpriteHandle) -> Result<Vector2>  { Ok(self.store.get(handle)?.position()) }
    #[inline] pub fn sprite_rotation(&self, handle: SpriteHandle) -> Result<f64>      { Ok(self.store.get(handle)?.rotation()) }
    #[inline] pub fn sprite_scale(&self, handle: SpriteHandle) -> Result<Vector2>     { Ok(self.store.get(handle)?.scale()) }
    #[inline] pub fn sprite_z_index(&self, handle: SpriteHandle) -> Result<i32>       { Ok(self.store.get(handle)?.z_index()) }

    ///
    /// Sets the colour that the frame buffer is cleared to before the sprites are drawn
    ///
    pub fn set_background_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.compositor.set_background_color(U8RgbaPixel::rgba(r, g, b, a));
    }

    #[inline]
    pub fn background_color(&self) -> U8RgbaPixel {
        self.compositor.background_color()
    }

    ///
    /// Changes the filtering used for the following render passes
    ///
    pub fn set_sampling_method(&mut self, method: SamplingMethod) {
        self.compositor.set_sampling_method(method);
    }

    #[inline]
    pub fn sampling_method(&self) -> SamplingMethod {
        self.compositor.sampling_method()
    }

    ///
    /// Composites the scene into the frame buffer
    ///
    pub fn render(&mut self) -> RenderStats {
        self.compositor.render(&mut self.store, &self.scene)
    }

    ///
    /// The most recently rendered frame
    ///
    #[inline]
    pub fn frame_buffer(&self) -> &FrameBuffer {
        self.compositor.frame_buffer()
    }

    ///
    /// The frame buffer, for drawing directly over the rendered frame (the next `render()` will clear anything written here)
    ///
    #[inline]
    pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        self.compositor.frame_buffer_mut()
    }

    ///
    /// The address of the frame buffer's pixels
    ///
    /// This stays valid until the next call to `resize()` (or until the engine is dropped). Reading it while a render
    /// is in progress is not possible from safe code, as `render()` borrows the engine mutably.
    ///
    #[inline]
    pub fn frame_buffer_ptr(&self) -> *const u8 {
        self.compositor.frame_buffer().as_ptr()
    }

    ///
    /// The length of the frame buffer in bytes
    ///
    #[inline]
    pub fn frame_buffer_len(&self) -> usize {
        self.compositor.frame_buffer().len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_engine_uses_default_settings() {
        let engine = Engine::new(64, 32).unwrap();

        assert!(engine.scene_width() == 64 && engine.scene_height() == 32);
        assert!(engine.frame_buffer_len() == 64 * 32 * 4);
        assert!(engine.background_color() == U8RgbaPixel::rgba(0, 0, 0, 255));
        assert!(engine.sampling_method() == SamplingMethod::Nearest);
        assert!(engine.sprite_count() == 0);
    }

    #[test]
    fn zero_size_engine_fails() {
        assert!(matches!(Engine::new(0, 10), Err(CompositorError::InvalidDimensions { width: 0, height: 10 })));
    }

    #[test]
    fn failed_resize_keeps_frame() {
        let mut engine = Engine::new(10, 10).unwrap();

        assert!(engine.resize(10, 0).is_err());
        assert!(engine.frame_buffer_len() == 400);
    }

    #[test]
    fn removing_sprite_removes_it_from_scene() {
        let mut engine  = Engine::new(10, 10).unwrap();
        let sprite      = engine.create_rect_sprite(2, 2, 255, 255, 255, 255).unwrap();

        engine.add_to_scene(sprite).unwrap();
        engine.remove_sprite(sprite).unwrap();

        assert!(!engine.is_in_scene(sprite));
        assert!(engine.draw_order().is_empty());
        assert!(engine.sprite_count() == 0);
    }

    #[test]
    fn relative_updates() {
        let mut engine  = Engine::new(10, 10).unwrap();
        let sprite      = engine.create_rect_sprite(2, 2, 255, 255, 255, 255).unwrap();

        engine.set_sprite_position(sprite, 1.0, 2.0).unwrap();
        engine.translate_sprite(sprite, 3.0, -1.0).unwrap();
        engine.set_sprite_scale(sprite, 2.0, 3.0).unwrap();
        engine.scale_sprite(sprite, 0.5, 2.0).unwrap();
        engine.rotate_sprite(sprite, -std::f64::consts::FRAC_PI_2).unwrap();

        assert!(engine.sprite_position(sprite).unwrap() == Vector2::new(4.0, 1.0));
        assert!(engine.sprite_scale(sprite).unwrap() == Vector2::new(1.0, 6.0));
        assert!((engine.sprite_rotation(sprite).unwrap() - 1.5 * std::f64::consts::PI).abs() < 1e-9);
    }

    #[test]
    fn setters_on_removed_sprite_fail() {
        let mut engine  = Engine::new(10, 10).unwrap();
        let sprite      = engine.create_rect_sprite(2, 2, 255, 255, 255, 255).unwrap();
        engine.remove_sprite(sprite).unwrap();

        assert!(matches!(engine.translate_sprite(sprite, 1.0, 1.0), Err(CompositorError::InvalidHandle(_))));
        assert!(matches!(engine.rotate_sprite(sprite, 1.0), Err(CompositorError::InvalidHandle(_))));
        assert!(matches!(engine.scale_sprite(sprite, 1.0, 1.0), Err(CompositorError::InvalidHandle(_))));
        assert!(matches!(engine.sprite_z_index(sprite), Err(CompositorError::InvalidHandle(_))));
    }

    #[test]
    fn overlay_is_cleared_by_render() {
        let mut engine = Engine::new(4, 4).unwrap();

        engine.render();
        engine.frame_buffer_mut().fill_rect(0, 0, 2, 2, U8RgbaPixel::rgba(255, 255, 255, 255));
        assert!(engine.frame_buffer().pixel(1, 1) == Some(U8RgbaPixel::rgba(255, 255, 255, 255)));

        engine.render();
        assert!(engine.frame_buffer().pixel(1, 1) == Some(U8RgbaPixel::rgba(0, 0, 0, 255)));
    }

    #[test]
    fn remove_from_scene_is_idempotent() {
        let mut engine  = Engine::new(10, 10).unwrap();
        let sprite      = engine.create_rect_sprite(2, 2, 255, 255, 255, 255).unwrap();

        engine.remove_from_scene(sprite);
        engine.add_to_scene(sprite).unwrap();
        engine.remove_from_scene(sprite);
        engine.remove_from_scene(sprite);

        assert!(!engine.is_in_scene(sprite));
    }
}
