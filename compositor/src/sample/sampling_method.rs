use serde::{Serialize, Deserialize};

///
/// The filtering used when reading a sprite's pixels at a fractional coordinate
///
/// This is a setting for a whole render pass rather than something that's chosen per sprite
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMethod {
    /// Read the pixel containing the coordinate (exact reproduction of the source pixels, crisp edges)
    #[default]
    Nearest,

    /// Interpolate between the four pixels surrounding the coordinate
    Bilinear,

    /// Average four bilinear samples taken in a 2x2 grid across the destination pixel
    Supersampling,
}

impl SamplingMethod {
    /// Every sampling method
    pub const ALL: [SamplingMethod; 3] = [SamplingMethod::Nearest, SamplingMethod::Bilinear, SamplingMethod::Supersampling];

    ///
    /// Converts a numeric code to a sampling method (0 = nearest, 1 = bilinear, 2 = supersampling)
    ///
    /// Unknown codes fall back to nearest sampling
    ///
    pub fn from_u8(value: u8) -> SamplingMethod {
        match value {
            1 => SamplingMethod::Bilinear,
            2 => SamplingMethod::Supersampling,
            _ => SamplingMethod::Nearest,
        }
    }

    ///
    /// Returns the numeric code for this sampling method
    ///
    pub fn to_u8(self) -> u8 {
        match self {
            SamplingMethod::Nearest         => 0,
            SamplingMethod::Bilinear        => 1,
            SamplingMethod::Supersampling   => 2,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn numeric_codes() {
        for method in SamplingMethod::ALL {
            assert!(SamplingMethod::from_u8(method.to_u8()) == method, "{:?}", method);
        }

        assert!(SamplingMethod::from_u8(99) == SamplingMethod::Nearest);
    }

    #[test]
    fn default_is_nearest() {
        assert!(SamplingMethod::default() == SamplingMethod::Nearest);
    }
}
