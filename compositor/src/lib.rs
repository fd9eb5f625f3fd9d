//!
//! # flo_compositor
//!
//! `flo_compositor` is a CPU-resident sprite compositor. It owns a set of sprites (RGBA bitmaps with a
//! position, rotation, scale and z-index), composites the ones that are in the scene into a single RGBA
//! frame buffer in z-order, and exposes that buffer so that a host can present it without copying.
//!
//! Output is deterministic: for a given set of sprites and sampling method, the frame buffer is the same
//! byte-for-byte on every run (and with or without the `multithreading` feature).
//!
//! The main entry point is `Engine`, which provides the whole call interface. `SpriteProxy` can be used
//! on the host side to batch up changes to a sprite and only send the ones that actually changed.
//!
//! # Features
//!
//! * `multithreading` - composites the rows covered by each sprite in parallel using `rayon`
//! * `render_png` - adds `FrameBuffer::write_png()` for exporting a rendered frame
//!
#![warn(bare_trait_objects)]

mod error;

/// Vector and affine transform types used to place sprites in the scene
pub mod math;

/// A pixel is a single RGBA colour sample, and a texture is a rectangular array of them
pub mod pixel;

/// Sprites are independently transformable bitmaps, stored in an arena and addressed by handle
pub mod sprite;

/// The scene is the set of sprites that are drawn by a render pass
pub mod scene;

/// Sampling converts a fractional coordinate in a sprite into a colour
pub mod sample;

/// Rendering composites the scene into a frame buffer
pub mod render;

/// The engine ties the sprite store, scene and compositor together into a single call interface
pub mod engine;

/// Host-side mirror of a sprite's state that only sends changes to the engine when something has changed
pub mod proxy;

pub use error::*;
pub use engine::*;
pub use proxy::*;
pub use sample::SamplingMethod;
pub use sprite::SpriteHandle;
