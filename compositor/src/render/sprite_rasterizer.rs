use crate::math::*;
use crate::pixel::*;
use crate::sample::*;
use crate::sprite::*;

use itertools::{Itertools, MinMaxResult};

use std::ops::{Range};

///
/// The region of the frame buffer covered by a sprite, in whole pixels
///
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBounds {
    pub x: Range<usize>,
    pub y: Range<usize>,
}

impl PixelBounds {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
}

///
/// Draws a single sprite into the rows of a frame buffer
///
/// The rasterizer maps each destination pixel centre back through the sprite's inverse transform, samples the
/// sprite there and composites the result over the existing frame buffer contents. It only reads from the sprite,
/// so a single rasterizer can be shared between threads that are each drawing different rows.
///
#[derive(Clone, Debug)]
pub struct SpriteRasterizer<'a> {
    texture:        &'a RgbaTexture,
    transform:      Transform2D,
    inverse:        Transform2D,
    footprint:      PixelFootprint,
    method:         SamplingMethod,

    /// Half the sprite's size, to move from centre-relative coordinates to the texture's pixel space
    half_width:     f64,
    half_height:    f64,

    /// The position of the scene origin in the frame buffer
    origin_x:       f64,
    origin_y:       f64,
}

impl<'a> SpriteRasterizer<'a> {
    ///
    /// Creates a rasterizer for a sprite with an up-to-date transform
    ///
    /// Returns None if the sprite's transform is stale or cannot be inverted (for example, because one of its scale
    /// factors is 0): sprites like this have no area and are not drawn.
    ///
    pub fn new(sprite: &'a Sprite, method: SamplingMethod, frame_width: usize, frame_height: usize) -> Option<SpriteRasterizer<'a>> {
        let transform   = sprite.cached_transform()?;
        let inverse     = sprite.cached_inverse()?;

        Some(SpriteRasterizer {
            texture:        sprite.texture(),
            transform:      transform,
            inverse:        inverse,
            footprint:      PixelFootprint::from_inverse_transform(&inverse),
            method:         method,
            half_width:     sprite.width() as f64 / 2.0,
            half_height:    sprite.height() as f64 / 2.0,
            origin_x:       frame_width as f64 / 2.0,
            origin_y:       frame_height as f64 / 2.0,
        })
    }

    ///
    /// Works out which pixels of a frame buffer the sprite might cover
    ///
    /// This is the bounding box of the transformed corners of the sprite, clipped to the frame buffer. The result is
    /// empty if the sprite is entirely off-screen.
    ///
    pub fn bounds(&self, frame_width: usize, frame_height: usize) -> PixelBounds {
        let (hw, hh)    = (self.half_width, self.half_height);
        let corners     = [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)]
            .map(|(x, y)| self.transform.transform_point(x, y));

        let x_range     = pixel_range(corners.iter().map(|(x, _)| *x + self.origin_x).minmax(), frame_width);
        let y_range     = pixel_range(corners.iter().map(|(_, y)| *y + self.origin_y).minmax(), frame_height);

        PixelBounds { x: x_range, y: y_range }
    }

    ///
    /// Composites the sprite into a single row of the frame buffer
    ///
    /// `row` is the whole row (`frame_width * 4` bytes), `y` is its index in the frame and `x_range` is the set of
    /// columns to draw.
    ///
    pub fn draw_row(&self, row: &mut [u8], y: usize, x_range: Range<usize>) {
        let scene_y = y as f64 + 0.5 - self.origin_y;

        for (x, pixel) in row.chunks_exact_mut(4).enumerate().take(x_range.end).skip(x_range.start) {
            let scene_x = x as f64 + 0.5 - self.origin_x;

            if let Some(color) = self.sample_scene(scene_x, scene_y) {
                if color.alpha() > 0 {
                    let dest = U8RgbaPixel::from_bytes(pixel);
                    color.source_over(dest).write_bytes(pixel);
                }
            }
        }
    }

    ///
    /// Samples the sprite at a point in scene coordinates
    ///
    #[inline]
    pub fn sample_scene(&self, scene_x: f64, scene_y: f64) -> Option<U8RgbaPixel> {
        let (local_x, local_y) = self.inverse.transform_point(scene_x, scene_y);

        sample(self.method, self.texture, local_x + self.half_width, local_y + self.half_height, &self.footprint)
    }
}

///
/// Converts the extent of a set of coordinates into the range of pixels that they touch, clipped to `0..limit`
///
fn pixel_range(extent: MinMaxResult<f64>, limit: usize) -> Range<usize> {
    let (min, max) = match extent {
        MinMaxResult::NoElements        => return 0..0,
        MinMaxResult::OneElement(val)   => (val, val),
        MinMaxResult::MinMax(min, max)  => (min, max),
    };

    if !min.is_finite() || !max.is_finite() {
        return 0..0;
    }

    // Float to usize casts saturate, so anything off the top-left clips to 0
    let start   = min.floor().max(0.0) as usize;
    let end     = max.ceil().min(limit as f64).max(0.0) as usize;

    if start >= end {
        0..0
    } else {
        start..end
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sprite_at(width: u32, height: u32, position: Vector2, rotation: f64, scale: Vector2) -> Sprite {
        let mut sprite = Sprite::new(RgbaTexture::solid_color(width, height, U8RgbaPixel::rgba(255, 255, 255, 255)).unwrap());

        sprite.set_position(position);
        sprite.set_rotation(rotation);
        sprite.set_scale(scale);
        sprite.refresh_transform();

        sprite
    }

    #[test]
    fn stale_sprite_has_no_rasterizer() {
        let sprite = Sprite::new(RgbaTexture::solid_color(2, 2, U8RgbaPixel::transparent()).unwrap());

        assert!(SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 10).is_none());
    }

    #[test]
    fn degenerate_sprite_has_no_rasterizer() {
        let sprite = sprite_at(4, 4, Vector2::zero(), 0.0, Vector2::new(0.0, 1.0));

        assert!(SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 10).is_none());
    }

    #[test]
    fn bounds_of_centred_sprite() {
        let sprite      = sprite_at(4, 2, Vector2::zero(), 0.0, Vector2::one());
        let rasterizer  = SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 10).unwrap();
        let bounds      = rasterizer.bounds(10, 10);

        assert!(bounds == PixelBounds { x: 3..7, y: 4..6 }, "{:?}", bounds);
    }

    #[test]
    fn bounds_are_clipped() {
        let sprite      = sprite_at(8, 8, Vector2::new(-5.0, 5.0), 0.0, Vector2::one());
        let rasterizer  = SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 10).unwrap();
        let bounds      = rasterizer.bounds(10, 10);

        assert!(bounds == PixelBounds { x: 0..4, y: 6..10 }, "{:?}", bounds);
    }

    #[test]
    fn off_screen_bounds_are_empty() {
        for position in [Vector2::new(-100.0, 0.0), Vector2::new(100.0, 0.0), Vector2::new(0.0, -100.0), Vector2::new(0.0, 100.0)] {
            let sprite      = sprite_at(4, 4, position, 0.0, Vector2::one());
            let rasterizer  = SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 10).unwrap();

            assert!(rasterizer.bounds(10, 10).is_empty(), "{:?}", position);
        }
    }

    #[test]
    fn rotated_bounds_cover_the_corners() {
        // A 4x4 square rotated by 45 degrees has a diagonal of about 5.66 pixels
        let sprite      = sprite_at(4, 4, Vector2::zero(), std::f64::consts::FRAC_PI_4, Vector2::one());
        let rasterizer  = SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 20, 20).unwrap();
        let bounds      = rasterizer.bounds(20, 20);

        assert!(bounds == PixelBounds { x: 7..13, y: 7..13 }, "{:?}", bounds);
    }

    #[test]
    fn draw_row_only_touches_range() {
        let sprite      = sprite_at(10, 1, Vector2::zero(), 0.0, Vector2::one());
        let rasterizer  = SpriteRasterizer::new(&sprite, SamplingMethod::Nearest, 10, 1).unwrap();
        let mut row     = vec![0u8; 40];

        rasterizer.draw_row(&mut row, 0, 2..5);

        for x in 0..10 {
            let expected = if (2..5).contains(&x) { 255 } else { 0 };
            assert!(row[x*4..(x*4+4)].iter().all(|byte| *byte == expected), "{} {:?}", x, &row[x*4..(x*4+4)]);
        }
    }
}
