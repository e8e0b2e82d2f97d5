//! Chromatic-aberration reduction.
//!
//! Scanner optics leave faint colored fringes around dark print. Those
//! fringes scatter over every hue bin and blur the histogram, so before
//! clustering two thresholds are applied:
//!
//! 1. HSV saturation: weakly saturated pixels collapse onto the neutral axis.
//! 2. HSL lightness: very dark pixels collapse to black.
//!
//! The input buffer is never modified; a new buffer is returned.

use crate::color::Srgb;

use super::cylindrical::{Hsl, Hsv};
use super::AberrationOptions;

/// Apply both threshold passes to a row-major pixel buffer.
///
/// Pixels untouched by a pass keep their exact original bytes.
///
/// # Example
///
/// ```
/// use hue_cluster::{reduce_aberration, AberrationOptions};
///
/// let pixels = [[250, 245, 240], [255, 0, 0], [20, 30, 25]];
/// let reduced = reduce_aberration(&pixels, &AberrationOptions::default());
///
/// assert_eq!(reduced[0], [250, 250, 250]); // faint tint removed
/// assert_eq!(reduced[1], [255, 0, 0]);     // saturated red kept
/// assert_eq!(reduced[2], [0, 0, 0]);       // near-black ink
/// ```
pub fn reduce_aberration(pixels: &[[u8; 3]], options: &AberrationOptions) -> Vec<[u8; 3]> {
    pixels
        .iter()
        .map(|&p| {
            let p = threshold_saturation(p, options.saturation_threshold);
            threshold_lightness(p, options.lightness_threshold)
        })
        .collect()
}

fn threshold_saturation(bytes: [u8; 3], threshold: f32) -> [u8; 3] {
    let hsv = Hsv::from(Srgb::from_bytes(bytes));
    if hsv.s > threshold || hsv.s == 0.0 {
        return bytes;
    }
    Srgb::from(Hsv { s: 0.0, ..hsv }).to_bytes()
}

fn threshold_lightness(bytes: [u8; 3], threshold: f32) -> [u8; 3] {
    let hsl = Hsl::from(Srgb::from_bytes(bytes));
    if hsl.l > threshold || hsl.l == 0.0 {
        return bytes;
    }
    Srgb::from(Hsl { l: 0.0, ..hsl }).to_bytes()
}
