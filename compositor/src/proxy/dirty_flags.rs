use bitflags::bitflags;

bitflags! {
    ///
    /// The parts of a sprite proxy that have changed since it was last synchronised with the engine
    ///
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DirtyFlags: u8 {
        /// The position needs to be sent
        const POSITION  = 0b0000_0001;

        /// The z-index needs to be sent
        const Z_INDEX   = 0b0000_0010;

        /// The rotation or scale has changed (these are sent together)
        const TRANSFORM = 0b0000_0100;
    }
}
