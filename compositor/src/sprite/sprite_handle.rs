use std::fmt;

///
/// A handle to a sprite in a `SpriteStore`
///
/// Contains both a slot index and a generation counter so that handles to removed sprites can still be detected
/// after their slot has been reused for a new sprite. Handles order by slot index, which is the tie-break used
/// when two sprites have the same z-index.
///
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpriteHandle {
    /// Slot index into the store
    pub (crate) index: u32,

    /// Generation counter, which must match the store's generation for this slot
    pub (crate) generation: u32,
}

impl SpriteHandle {
    /// Returns the slot index of this handle
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation of this handle
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }

    ///
    /// Packs this handle into a single integer (for hosts that can only pass numbers across their boundary)
    ///
    #[inline]
    pub const fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | (self.index as u64)
    }

    ///
    /// Unpacks a handle previously created by `to_bits()`
    ///
    #[inline]
    pub const fn from_bits(bits: u64) -> SpriteHandle {
        SpriteHandle {
            index:      (bits & 0xffff_ffff) as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl fmt::Debug for SpriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SpriteHandle({}@gen{})", self.index, self.generation)
    }
}
