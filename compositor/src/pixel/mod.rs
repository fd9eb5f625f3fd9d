mod u8_rgba;
mod alpha_blend;
mod rgba_texture;

pub use u8_rgba::*;
pub use rgba_texture::*;
