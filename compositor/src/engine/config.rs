use crate::pixel::*;
use crate::sample::*;

use serde::{Serialize, Deserialize};

///
/// Settings used to create an engine
///
/// Every field has a default, so a host can load a partial configuration (for example `{ "width": 320, "height": 200 }`)
/// from a JSON or TOML file.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Width of the frame buffer in pixels
    pub width: u32,

    /// Height of the frame buffer in pixels
    pub height: u32,

    /// Colour the frame is cleared to at the start of every render, as non-premultiplied RGBA
    pub background_color: [u8; 4],

    /// Filtering used when sprites are drawn
    pub sampling_method: SamplingMethod,
}

impl EngineConfig {
    ///
    /// The default configuration, with a different frame size
    ///
    pub fn with_size(width: u32, height: u32) -> EngineConfig {
        EngineConfig {
            width:  width,
            height: height,
            ..EngineConfig::default()
        }
    }

    #[inline]
    pub fn background_pixel(&self) -> U8RgbaPixel {
        U8RgbaPixel::from_components(self.background_color)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            width:              800,
            height:             600,
            background_color:   [0, 0, 0, 255],
            sampling_method:    SamplingMethod::Nearest,
        }
    }
}
