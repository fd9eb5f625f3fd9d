mod vector2;
mod transform2d;

pub use vector2::*;
pub use transform2d::*;
