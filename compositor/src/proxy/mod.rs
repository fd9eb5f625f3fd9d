mod dirty_flags;
mod sprite_proxy;

pub use dirty_flags::*;
pub use sprite_proxy::*;
