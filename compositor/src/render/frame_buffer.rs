use crate::error::*;
use crate::pixel::*;

///
/// The RGBA frame buffer that the compositor renders into
///
/// Pixels are stored in rows starting at the top-left, 4 bytes per pixel, with no padding between rows. The storage
/// is replaced (not resized in place) when the frame buffer changes size, so any pointer retrieved by `as_ptr()`
/// must be fetched again after a resize.
///
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<u8>,
}

impl FrameBuffer {
    ///
    /// Creates a new frame buffer, with all pixels set to transparent
    ///
    pub fn new(width: u32, height: u32) -> Result<FrameBuffer> {
        Ok(FrameBuffer {
            width:  width as usize,
            height: height as usize,
            pixels: alloc_rgba_buffer(width, height)?,
        })
    }

    #[inline] pub fn width(&self) -> usize    { self.width }
    #[inline] pub fn height(&self) -> usize   { self.height }

    ///
    /// The number of bytes in a single row of this frame buffer
    ///
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * 4
    }

    ///
    /// Replaces the storage for this frame buffer with a new, transparent, buffer of a different size
    ///
    /// The old storage is left untouched if the new size is invalid.
    ///
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        *self = FrameBuffer::new(width, height)?;

        Ok(())
    }

    ///
    /// Sets every pixel in the frame to a single colour
    ///
    pub fn clear(&mut self, color: U8RgbaPixel) {
        let components = color.get_components();

        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&components);
        }
    }

    ///
    /// Writes a single pixel (without blending), ignoring positions outside the frame
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: U8RgbaPixel) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            color.write_bytes(&mut self.pixels[idx..(idx+4)]);
        }
    }

    ///
    /// Fills a rectangle with a single colour (without blending), clipped to the frame
    ///
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: U8RgbaPixel) {
        let end_x       = x.saturating_add(width).min(self.width);
        let end_y       = y.saturating_add(height).min(self.height);
        let components  = color.get_components();

        if x >= end_x {
            return;
        }

        for row in y..end_y {
            let row_start = row * self.width * 4;

            for pixel in self.pixels[(row_start + x*4)..(row_start + end_x*4)].chunks_exact_mut(4) {
                pixel.copy_from_slice(&components);
            }
        }
    }

    ///
    /// Reads a single pixel from the frame
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<U8RgbaPixel> {
        if x >= self.width || y >= self.height {
            None
        } else {
            let idx = (y * self.width + x) * 4;
            Some(U8RgbaPixel::from_bytes(&self.pixels[idx..(idx+4)]))
        }
    }

    ///
    /// The pixels in this frame buffer, as RGBA bytes
    ///
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub (crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    ///
    /// Address of the first byte of the frame buffer, for hosts that read the pixels directly out of memory
    ///
    /// This is invalidated by `resize()`
    ///
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    ///
    /// The length of the frame buffer in bytes (`width * height * 4`)
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
