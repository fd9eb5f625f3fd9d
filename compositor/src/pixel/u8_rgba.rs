///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is not pre-multiplied into the RGB values: this is the format sprites are supplied in and the
/// format the frame buffer is presented in.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8RgbaPixel(pub [u8; 4]);

impl U8RgbaPixel {
    ///
    /// Creates a new U8 pixel from the component bytes
    ///
    #[inline]
    pub const fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        U8RgbaPixel([r, g, b, a])
    }

    ///
    /// A pixel with all components set to 0
    ///
    #[inline]
    pub const fn transparent() -> Self {
        U8RgbaPixel([0, 0, 0, 0])
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub const fn get_components(&self) -> [u8; 4] {
        self.0
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.0[3]
    }

    ///
    /// Reads a pixel from the first 4 bytes of a slice
    ///
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        U8RgbaPixel([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    ///
    /// Writes this pixel to the first 4 bytes of a slice
    ///
    #[inline]
    pub fn write_bytes(&self, bytes: &mut [u8]) {
        bytes[0..4].copy_from_slice(&self.0);
    }

    ///
    /// Converts this pixel to f32 components in the range 0-255
    ///
    #[inline]
    pub fn to_f32_components(&self) -> [f32; 4] {
        let [r, g, b, a] = self.0;

        [r as f32, g as f32, b as f32, a as f32]
    }

    ///
    /// Creates a pixel from f32 components in the range 0-255 (values are rounded to the nearest integer and clamped)
    ///
    #[inline]
    pub fn from_f32_components(components: [f32; 4]) -> Self {
        let [r, g, b, a] = components;

        U8RgbaPixel([to_u8(r), to_u8(g), to_u8(b), to_u8(a)])
    }
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel::transparent()
    }
}

impl From<[u8; 4]> for U8RgbaPixel {
    #[inline]
    fn from(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }
}

#[inline]
fn to_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
