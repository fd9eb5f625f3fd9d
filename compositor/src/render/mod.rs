mod frame_buffer;
mod sprite_rasterizer;
mod compositor;
#[cfg(feature="render_png")]
mod image_render;

pub use frame_buffer::*;
pub use sprite_rasterizer::*;
pub use compositor::*;
