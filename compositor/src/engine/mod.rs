mod config;
mod engine;

pub use config::*;
pub use engine::*;
