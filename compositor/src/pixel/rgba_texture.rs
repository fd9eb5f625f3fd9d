use super::u8_rgba::*;

use crate::error::*;

///
/// An 8-bpp, non-premultiplied RGBA texture
///
/// Pixels are stored in rows, starting from the top-left corner of the image
///
#[derive(Clone, Debug, PartialEq)]
pub struct RgbaTexture {
    /// The width of the texture in pixels (a row is 4x this value)
    width: usize,

    /// The height of the texture in pixels
    height: usize,

    /// The pixels stored for this texture
    pixels: Vec<u8>,
}

impl RgbaTexture {
    ///
    /// Creates a texture from a set of RGBA pixels
    ///
    /// The pixel data must be exactly `width * height * 4` bytes long and neither dimension can be 0
    ///
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<RgbaTexture> {
        let expected_len = rgba_buffer_len(width, height)?;

        if pixels.len() != expected_len {
            return Err(CompositorError::BufferSizeMismatch { expected: expected_len, actual: pixels.len() });
        }

        Ok(RgbaTexture {
            width:  width as usize,
            height: height as usize,
            pixels: pixels,
        })
    }

    ///
    /// Creates a texture where every pixel is the same colour
    ///
    pub fn solid_color(width: u32, height: u32, color: U8RgbaPixel) -> Result<RgbaTexture> {
        let mut pixels  = alloc_rgba_buffer(width, height)?;
        let components  = color.get_components();

        for pixel in pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&components);
        }

        Ok(RgbaTexture {
            width:  width as usize,
            height: height as usize,
            pixels: pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The raw RGBA bytes for this texture
    ///
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    ///
    /// True if a fractional coordinate is within `[0, width) x [0, height)`
    ///
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }

    ///
    /// Reads the pixel at an integer position, returning None if the position is outside the texture
    ///
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> Option<U8RgbaPixel> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            let idx = ((y as usize) * self.width + (x as usize)) * 4;
            Some(U8RgbaPixel::from_bytes(&self.pixels[idx..(idx+4)]))
        }
    }

    ///
    /// Reads the pixel at an integer position, returning a transparent pixel if the position is outside the texture
    ///
    #[inline]
    pub fn pixel_or_transparent(&self, x: i64, y: i64) -> U8RgbaPixel {
        self.pixel(x, y).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_pixels_checks_length() {
        let result = RgbaTexture::from_pixels(2, 2, vec![0; 15]);

        assert!(matches!(result, Err(CompositorError::BufferSizeMismatch { expected: 16, actual: 15 })), "{:?}", result);
    }

    #[test]
    fn from_pixels_checks_dimensions() {
        let result = RgbaTexture::from_pixels(0, 2, vec![]);

        assert!(matches!(result, Err(CompositorError::InvalidDimensions { width: 0, height: 2 })), "{:?}", result);
    }

    #[test]
    fn solid_color_fills_every_pixel() {
        let texture = RgbaTexture::solid_color(3, 2, U8RgbaPixel::rgba(1, 2, 3, 4)).unwrap();

        assert!(texture.pixels().len() == 24);
        assert!(texture.pixels().chunks_exact(4).all(|pixel| pixel == [1, 2, 3, 4]));
    }

    #[test]
    fn oversized_solid_color_is_an_error() {
        let result = RgbaTexture::solid_color(u32::MAX, 0x3000_0000, U8RgbaPixel::transparent());

        assert!(matches!(result, Err(CompositorError::InvalidDimensions { .. })));
    }

    #[test]
    fn pixel_reads_row_major() {
        let texture = RgbaTexture::from_pixels(2, 2, vec![
            255, 0, 0, 255,     0, 255, 0, 255,
            0, 0, 255, 255,     255, 255, 255, 255,
        ]).unwrap();

        assert!(texture.pixel(1, 0) == Some(U8RgbaPixel::rgba(0, 255, 0, 255)));
        assert!(texture.pixel(0, 1) == Some(U8RgbaPixel::rgba(0, 0, 255, 255)));
        assert!(texture.pixel(2, 0).is_none());
        assert!(texture.pixel(0, -1).is_none());
        assert!(texture.pixel_or_transparent(-1, 0) == U8RgbaPixel::transparent());
    }

    #[test]
    fn contains_is_half_open() {
        let texture = RgbaTexture::solid_color(4, 3, U8RgbaPixel::transparent()).unwrap();

        assert!(texture.contains(0.0, 0.0));
        assert!(texture.contains(3.999, 2.999));
        assert!(!texture.contains(4.0, 1.0));
        assert!(!texture.contains(1.0, 3.0));
        assert!(!texture.contains(-0.001, 1.0));
    }
}
