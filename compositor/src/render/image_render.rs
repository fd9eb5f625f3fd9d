use super::frame_buffer::*;

use crate::error::*;

use std::io::{Write, BufWriter};

impl FrameBuffer {
    ///
    /// Encodes the contents of this frame buffer as a PNG file (8-bit, non-premultiplied RGBA)
    ///
    pub fn write_png<TStream>(&self, target: TStream) -> Result<()>
    where
        TStream: Write,
    {
        let mut encoder = png::Encoder::new(BufWriter::new(target), self.width() as u32, self.height() as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.as_bytes())?;
        writer.finish()?;

        Ok(())
    }
}
