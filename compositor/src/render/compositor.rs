use super::frame_buffer::*;
use super::sprite_rasterizer::*;

use crate::error::*;
use crate::pixel::*;
use crate::sample::*;
use crate::scene::*;
use crate::sprite::*;

use tracing::{trace, trace_span, warn};

#[cfg(feature="multithreading")]
use rayon::prelude::*;

///
/// Summary of what happened during a render pass
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Sprites that were composited into the frame
    pub sprites_drawn: usize,

    /// Sprites in the scene that were skipped because they have no area or are entirely outside the frame
    pub sprites_skipped: usize,
}

///
/// Composites the sprites in a scene into a frame buffer
///
/// Each render pass clears the frame to the background colour, then draws the visible sprites in ascending z-order
/// using 'source over' blending. Sprites are drawn one at a time, so the output does not depend on how the rows of
/// a sprite are divided between threads.
///
#[derive(Clone, Debug)]
pub struct Compositor {
    frame:              FrameBuffer,
    background_color:   U8RgbaPixel,
    sampling_method:    SamplingMethod,
}

impl Compositor {
    ///
    /// Creates a compositor with a frame buffer of the specified size
    ///
    pub fn new(width: u32, height: u32, background_color: U8RgbaPixel, sampling_method: SamplingMethod) -> Result<Compositor> {
        Ok(Compositor {
            frame:              FrameBuffer::new(width, height)?,
            background_color:   background_color,
            sampling_method:    sampling_method,
        })
    }

    #[inline] pub fn frame_buffer(&self) -> &FrameBuffer               { &self.frame }
    #[inline] pub fn frame_buffer_mut(&mut self) -> &mut FrameBuffer   { &mut self.frame }
    #[inline] pub fn background_color(&self) -> U8RgbaPixel            { self.background_color }
    #[inline] pub fn sampling_method(&self) -> SamplingMethod          { self.sampling_method }

    #[inline]
    pub fn set_background_color(&mut self, color: U8RgbaPixel) {
        self.background_color = color;
    }

    #[inline]
    pub fn set_sampling_method(&mut self, method: SamplingMethod) {
        self.sampling_method = method;
    }

    ///
    /// Reallocates the frame buffer at a new size
    ///
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.frame.resize(width, height)
    }

    ///
    /// Renders the scene into the frame buffer
    ///
    /// Any stale sprite transforms are recalculated before drawing, which is why this needs mutable access to the store
    ///
    pub fn render(&mut self, store: &mut SpriteStore, scene: &Scene) -> RenderStats {
        let order   = scene.ordered_visible(store);
        let span    = trace_span!("render", sprites = order.len(), method = ?self.sampling_method);
        let _enter  = span.enter();

        self.frame.clear(self.background_color);

        let mut stats = RenderStats::default();

        for handle in order {
            let sprite = match store.get_mut(handle) {
                Ok(sprite)  => sprite,
                Err(_)      => continue,
            };
            sprite.refresh_transform();

            if self.draw_sprite(sprite) {
                stats.sprites_drawn += 1;
            } else {
                stats.sprites_skipped += 1;
            }
        }

        trace!(sprites_drawn = stats.sprites_drawn, sprites_skipped = stats.sprites_skipped, "Render finished");

        stats
    }

    ///
    /// Composites a single sprite into the frame buffer, returning false if it covers no pixels
    ///
    fn draw_sprite(&mut self, sprite: &Sprite) -> bool {
        let width       = self.frame.width();
        let height      = self.frame.height();
        let stride      = self.frame.stride();

        let rasterizer  = match SpriteRasterizer::new(sprite, self.sampling_method, width, height) {
            Some(rasterizer)    => rasterizer,
            None                => {
                warn!(position = ?sprite.position(), scale = ?sprite.scale(), "Sprite transform is not invertible: not drawing");
                return false;
            }
        };

        let bounds = rasterizer.bounds(width, height);
        if bounds.is_empty() {
            return false;
        }

        let first_row   = bounds.y.start;
        let rows        = &mut self.frame.as_bytes_mut()[(bounds.y.start * stride)..(bounds.y.end * stride)];
        let x_range     = bounds.x;

        #[cfg(feature="multithreading")]
        {
            rows.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(row_idx, row)| rasterizer.draw_row(row, first_row + row_idx, x_range.clone()));
        }

        #[cfg(not(feature="multithreading"))]
        {
            rows.chunks_mut(stride)
                .enumerate()
                .for_each(|(row_idx, row)| rasterizer.draw_row(row, first_row + row_idx, x_range.clone()));
        }

        true
    }
}
