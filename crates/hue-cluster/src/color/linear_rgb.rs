//! Linear RGB color type
//!
//! The chromatic projection is only meaningful in linear light, where the
//! neutral axis is the straight diagonal from black to white.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are in the range 0.0..=1.0 for colors decoded from 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decode 8-bit sRGB bytes with the exact 256-entry table.
    ///
    /// # Example
    /// ```
    /// use hue_cluster::LinearRgb;
    /// let white = LinearRgb::from_bytes([255, 255, 255]);
    /// assert!((white.g - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: srgb8_to_linear(bytes[0]),
            g: srgb8_to_linear(bytes[1]),
            b: srgb8_to_linear(bytes[2]),
        }
    }

    /// Channels widened to f64 for projection math.
    #[inline]
    pub fn to_f64(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
