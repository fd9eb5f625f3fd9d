use super::u8_rgba::*;

use once_cell::sync::{Lazy};

///
/// Lookup table that maps u8 alpha values to the range 0.0-1.0
///
static UNIT_ALPHA: Lazy<[f32; 256]> = Lazy::new(|| {
    let mut table = [0.0; 256];

    for (value, unit) in table.iter_mut().enumerate() {
        *unit = (value as f32) / 255.0;
    }

    table
});

impl U8RgbaPixel {
    ///
    /// Composites this pixel over a destination pixel using the 'source over' operation on non-premultiplied values
    ///
    /// Colour channels are blended as `src·srcAlpha + dst·(1-srcAlpha)` and alpha as `srcAlpha + dstAlpha·(1-srcAlpha)`.
    ///
    #[inline]
    pub fn source_over(self, dest: U8RgbaPixel) -> U8RgbaPixel {
        let src_alpha = self.alpha();

        // Fully opaque and fully transparent pixels need no arithmetic
        if src_alpha == 255 {
            return self;
        } else if src_alpha == 0 {
            return dest;
        }

        let src_alpha   = UNIT_ALPHA[src_alpha as usize];
        let dst_alpha   = UNIT_ALPHA[dest.alpha() as usize];
        let inv_alpha   = 1.0 - src_alpha;

        let [sr, sg, sb, _] = self.to_f32_components();
        let [dr, dg, db, _] = dest.to_f32_components();

        U8RgbaPixel::from_f32_components([
            sr*src_alpha + dr*inv_alpha,
            sg*src_alpha + dg*inv_alpha,
            sb*src_alpha + db*inv_alpha,
            (src_alpha + dst_alpha*inv_alpha) * 255.0,
        ])
    }
}
