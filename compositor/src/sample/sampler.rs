use super::sampling_method::*;

use crate::math::*;
use crate::pixel::*;

///
/// Offsets (in destination pixels) of the four sub-samples used for supersampling
///
const SUPERSAMPLE_OFFSETS: [(f64, f64); 4] = [(-0.25, -0.25), (0.25, -0.25), (-0.25, 0.25), (0.25, 0.25)];

///
/// The size and shape of a single destination pixel, mapped back into a sprite's pixel space
///
/// `x_step` is the change in the sprite coordinate when moving one pixel right in the frame buffer, and `y_step`
/// is the change when moving one pixel down.
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelFootprint {
    pub x_step: Vector2,
    pub y_step: Vector2,
}

impl PixelFootprint {
    ///
    /// The footprint of an untransformed pixel (one sprite pixel per destination pixel)
    ///
    #[inline]
    pub const fn unit() -> PixelFootprint {
        PixelFootprint {
            x_step: Vector2::new(1.0, 0.0),
            y_step: Vector2::new(0.0, 1.0),
        }
    }

    ///
    /// Creates the footprint for a transform that maps scene coordinates to sprite coordinates
    ///
    #[inline]
    pub fn from_inverse_transform(inverse: &Transform2D) -> PixelFootprint {
        PixelFootprint {
            x_step: inverse.transform_vector(Vector2::new(1.0, 0.0)),
            y_step: inverse.transform_vector(Vector2::new(0.0, 1.0)),
        }
    }
}

impl Default for PixelFootprint {
    fn default() -> Self {
        PixelFootprint::unit()
    }
}

///
/// Reads a colour from a texture at a coordinate in its pixel space (origin at the top-left corner)
///
/// Coordinates outside of `[0, width) x [0, height)` always return None, whichever sampling method is in use. The
/// footprint is only used by supersampling.
///
#[inline]
pub fn sample(method: SamplingMethod, texture: &RgbaTexture, x: f64, y: f64, footprint: &PixelFootprint) -> Option<U8RgbaPixel> {
    match method {
        SamplingMethod::Nearest         => sample_nearest(texture, x, y),
        SamplingMethod::Bilinear        => sample_bilinear(texture, x, y),
        SamplingMethod::Supersampling   => sample_supersampling(texture, x, y, footprint),
    }
}

///
/// Returns the pixel containing a coordinate, unmodified
///
#[inline]
pub fn sample_nearest(texture: &RgbaTexture, x: f64, y: f64) -> Option<U8RgbaPixel> {
    if !texture.contains(x, y) {
        return None;
    }

    texture.pixel(x.floor() as i64, y.floor() as i64)
}

///
/// Interpolates between the four pixels whose centres surround a coordinate
///
/// Each channel (including alpha) is interpolated independently. Neighbouring pixels outside the texture are
/// treated as transparent black, so sprites fade out over the last half-pixel at their edges.
///
#[inline]
pub fn sample_bilinear(texture: &RgbaTexture, x: f64, y: f64) -> Option<U8RgbaPixel> {
    if !texture.contains(x, y) {
        return None;
    }

    Some(U8RgbaPixel::from_f32_components(bilinear_filter(texture, x, y)))
}

///
/// Averages four bilinear samples taken in a 2x2 grid across the destination pixel
///
/// The footprint describes the destination pixel in the texture's pixel space. Sub-samples that land outside of the
/// texture contribute transparent black to the average.
///
pub fn sample_supersampling(texture: &RgbaTexture, x: f64, y: f64, footprint: &PixelFootprint) -> Option<U8RgbaPixel> {
    if !texture.contains(x, y) {
        return None;
    }

    let mut sum = [0.0f32; 4];

    for (offset_x, offset_y) in SUPERSAMPLE_OFFSETS.iter() {
        let offset      = footprint.x_step * *offset_x + footprint.y_step * *offset_y;
        let (sx, sy)    = (x + offset.x, y + offset.y);

        if texture.contains(sx, sy) {
            let sample = bilinear_filter(texture, sx, sy);

            for channel in 0..4 {
                sum[channel] += sample[channel];
            }
        }
    }

    let count = SUPERSAMPLE_OFFSETS.len() as f32;
    Some(U8RgbaPixel::from_f32_components([sum[0]/count, sum[1]/count, sum[2]/count, sum[3]/count]))
}

///
/// Performs bilinear filtering at a coordinate, returning the unrounded channel values
///
#[inline]
fn bilinear_filter(texture: &RgbaTexture, x: f64, y: f64) -> [f32; 4] {
    // Pixel centres are at 0.5 offsets
    let x   = x - 0.5;
    let y   = y - 0.5;

    let x0  = x.floor();
    let y0  = y.floor();
    let fx  = (x - x0) as f32;
    let fy  = (y - y0) as f32;
    let x0  = x0 as i64;
    let y0  = y0 as i64;

    let c00 = texture.pixel_or_transparent(x0, y0).to_f32_components();
    let c10 = texture.pixel_or_transparent(x0+1, y0).to_f32_components();
    let c01 = texture.pixel_or_transparent(x0, y0+1).to_f32_components();
    let c11 = texture.pixel_or_transparent(x0+1, y0+1).to_f32_components();

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut result = [0.0f32; 4];
    for channel in 0..4 {
        result[channel] = w00*c00[channel] + w10*c10[channel] + w01*c01[channel] + w11*c11[channel];
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;

    ///
    /// 2x2 image: red, green / blue, white
    ///
    fn quad_texture() -> RgbaTexture {
        RgbaTexture::from_pixels(2, 2, vec![
            255, 0, 0, 255,     0, 255, 0, 255,
            0, 0, 255, 255,     255, 255, 255, 255,
        ]).unwrap()
    }

    #[test]
    fn nearest_reads_containing_pixel() {
        let texture = quad_texture();

        assert!(sample_nearest(&texture, 0.0, 0.0) == Some(U8RgbaPixel::rgba(255, 0, 0, 255)));
        assert!(sample_nearest(&texture, 1.9, 0.2) == Some(U8RgbaPixel::rgba(0, 255, 0, 255)));
        assert!(sample_nearest(&texture, 0.5, 1.5) == Some(U8RgbaPixel::rgba(0, 0, 255, 255)));
    }

    #[test]
    fn nearest_out_of_bounds() {
        let texture = quad_texture();

        assert!(sample_nearest(&texture, -0.01, 0.0).is_none());
        assert!(sample_nearest(&texture, 2.0, 0.0).is_none());
        assert!(sample_nearest(&texture, 0.0, 2.0).is_none());
    }

    #[test]
    fn bilinear_at_pixel_centre_is_exact() {
        let texture = quad_texture();

        assert!(sample_bilinear(&texture, 0.5, 0.5) == Some(U8RgbaPixel::rgba(255, 0, 0, 255)));
        assert!(sample_bilinear(&texture, 1.5, 0.5) == Some(U8RgbaPixel::rgba(0, 255, 0, 255)));
        assert!(sample_bilinear(&texture, 0.5, 1.5) == Some(U8RgbaPixel::rgba(0, 0, 255, 255)));
        assert!(sample_bilinear(&texture, 1.5, 1.5) == Some(U8RgbaPixel::rgba(255, 255, 255, 255)));
    }

    #[test]
    fn bilinear_between_four_pixels_averages() {
        let texture = quad_texture();
        let color   = sample_bilinear(&texture, 1.0, 1.0).unwrap();

        // (255 + 0 + 0 + 255) / 4 for red, and the same for green and blue
        assert!(color == U8RgbaPixel::rgba(128, 128, 128, 255), "{:?}", color);
    }

    #[test]
    fn bilinear_edge_fades_to_transparent() {
        let texture = quad_texture();
        let color   = sample_bilinear(&texture, 0.0, 0.5).unwrap();

        // Half of the weight is on the transparent pixel outside the texture
        assert!(color == U8RgbaPixel::rgba(128, 0, 0, 128), "{:?}", color);
    }

    #[test]
    fn supersampling_uniform_interior() {
        let color   = U8RgbaPixel::rgba(12, 34, 56, 200);
        let texture = RgbaTexture::solid_color(8, 8, color).unwrap();

        for y in 2..6 {
            for x in 2..6 {
                let footprint   = PixelFootprint::from_inverse_transform(&Transform2D::rotate_radians(0.3));
                let sampled     = sample_supersampling(&texture, x as f64 + 0.37, y as f64 + 0.61, &footprint);

                assert!(sampled == Some(color), "({}, {}) {:?}", x, y, sampled);
            }
        }
    }

    #[test]
    fn supersampling_averages_across_the_footprint() {
        let texture = quad_texture();

        // A footprint 2 pixels wide puts the sub-samples at x=0.5 and x=1.5 (red and green)
        let footprint   = PixelFootprint { x_step: Vector2::new(2.0, 0.0), y_step: Vector2::new(0.0, 0.0) };
        let color       = sample_supersampling(&texture, 1.0, 0.5, &footprint).unwrap();

        assert!(color == U8RgbaPixel::rgba(128, 128, 0, 255), "{:?}", color);
    }

    #[test]
    fn all_methods_clip_at_sprite_edges() {
        let texture     = RgbaTexture::solid_color(4, 4, U8RgbaPixel::rgba(255, 255, 255, 255)).unwrap();
        let footprint   = PixelFootprint::unit();

        for method in SamplingMethod::ALL {
            for (x, y) in [(-0.5, 1.0), (4.0, 1.0), (1.0, -0.001), (1.0, 4.5), (-10.0, -10.0), (100.0, 2.0)] {
                assert!(sample(method, &texture, x, y, &footprint).is_none(), "{:?} at ({}, {})", method, x, y);
            }
        }
    }

    #[test]
    fn footprint_of_scale_transform() {
        let inverse     = Transform2D::scale(2.0, 4.0).invert().unwrap();
        let footprint   = PixelFootprint::from_inverse_transform(&inverse);

        assert!(footprint.x_step == Vector2::new(0.5, 0.0), "{:?}", footprint);
        assert!(footprint.y_step == Vector2::new(0.0, 0.25), "{:?}", footprint);
    }
}
