//! Packed 24-bit color key.

/// An 8-bit RGB triplet packed as `0xRRGGBB`.
///
/// Used as the key of every per-color table (frequency, projection, hue)
/// so that distinct colors hash and compare as a single integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedRgb(u32);

impl PackedRgb {
    /// Pack a byte array [R, G, B].
    ///
    /// # Example
    /// ```
    /// use hue_cluster::PackedRgb;
    /// let key = PackedRgb::from_bytes([0x12, 0x34, 0x56]);
    /// assert_eq!(key.value(), 0x123456);
    /// assert_eq!(key.to_bytes(), [0x12, 0x34, 0x56]);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | bytes[2] as u32)
    }

    /// Unpack to [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// The raw `0xRRGGBB` value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<[u8; 3]> for PackedRgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}
