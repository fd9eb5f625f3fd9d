mod sprite_handle;
mod sprite;
mod sprite_store;

pub use sprite_handle::*;
pub use sprite::*;
pub use sprite_store::*;
