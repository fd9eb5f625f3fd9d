mod scene;

pub use scene::*;
