//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - **sRGB** ([`Srgb`], raw `[u8; 3]`): how scanned pixels arrive and how
//!   layers are written back.
//! - **LinearRgb**: linear light intensity. The chromatic projection is
//!   computed here.
//!
//! # Example
//!
//! ```
//! use hue_cluster::color::{to_linear, to_srgb};
//!
//! let pixels = [[255, 0, 0], [128, 128, 128]];
//! let linear = to_linear(&pixels);
//! assert_eq!(to_srgb(&linear), pixels.to_vec());
//! ```

mod linear_rgb;
mod lut;
mod packed;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use packed::PackedRgb;
pub use srgb::Srgb;

/// Decode a row-major buffer of 8-bit sRGB pixels to linear light.
pub fn to_linear(pixels: &[[u8; 3]]) -> Vec<LinearRgb> {
    pixels.iter().map(|&p| LinearRgb::from_bytes(p)).collect()
}

/// Encode linear-light pixels back to 8-bit sRGB.
///
/// Out-of-range channels are clamped before encoding.
pub fn to_srgb(pixels: &[LinearRgb]) -> Vec<[u8; 3]> {
    pixels
        .iter()
        .map(|p| {
            let clamped = LinearRgb::new(
                p.r.clamp(0.0, 1.0),
                p.g.clamp(0.0, 1.0),
                p.b.clamp(0.0, 1.0),
            );
            Srgb::from(clamped).to_bytes()
        })
        .collect()
}
