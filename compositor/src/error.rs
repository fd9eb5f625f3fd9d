use crate::sprite::SpriteHandle;

use thiserror::Error;

///
/// Errors that can be returned by the compositor
///
/// All of these are reported synchronously by the operation that caused them, and the operation will have
/// left the engine in the state it was in before it was called.
///
#[derive(Debug, Error)]
pub enum CompositorError {
    /// The handle does not refer to a live sprite (it was never allocated, or the sprite has been removed)
    #[error("Invalid sprite handle: {0:?}")]
    InvalidHandle(SpriteHandle),

    /// A sprite or frame buffer was requested with a zero area (or an area too large to address)
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The pixel data supplied for a sprite is not `width * height * 4` bytes long
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// The frame could not be encoded as a PNG file
    #[cfg(feature = "render_png")]
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

/// Result type for compositor operations
pub type Result<T> = std::result::Result<T, CompositorError>;

///
/// Works out the number of bytes needed for an RGBA buffer of the specified size
///
/// Returns `InvalidDimensions` if either dimension is 0 or the size can't be represented
///
#[inline]
pub (crate) fn rgba_buffer_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(CompositorError::InvalidDimensions { width, height });
    }

    (width as usize).checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or(CompositorError::InvalidDimensions { width, height })
}

///
/// Allocates a zeroed RGBA buffer for an image of the specified size
///
/// Returns `InvalidDimensions` if the size is invalid or the buffer can't be allocated
///
pub (crate) fn alloc_rgba_buffer(width: u32, height: u32) -> Result<Vec<u8>> {
    let len         = rgba_buffer_len(width, height)?;
    let mut pixels  = Vec::new();

    pixels.try_reserve_exact(len)
        .map_err(|_| CompositorError::InvalidDimensions { width, height })?;
    pixels.resize(len, 0u8);

    Ok(pixels)
}
