//! HSV and HSL cylindrical forms of sRGB for channel thresholding.
//!
//! Both share the same hue; they differ in the radial and vertical axes:
//! - **HSV**: saturation relative to the brightest channel, value = max.
//! - **HSL**: saturation relative to lightness, lightness = (max + min) / 2.
//!
//! Hue is a unit angle in `[0, 1)`. For achromatic colors hue is 0.0 and
//! irrelevant since saturation is zero.

use crate::color::Srgb;

/// HSV: hue, saturation, value (all 0.0..=1.0, hue < 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// HSL: hue, saturation, lightness (all 0.0..=1.0, hue < 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// Unit hue of an RGB triplet given its precomputed extremes.
fn unit_hue(c: Srgb, max: f32, delta: f32) -> f32 {
    if delta <= 0.0 {
        return 0.0;
    }
    let sector = if max == c.r {
        ((c.g - c.b) / delta).rem_euclid(6.0)
    } else if max == c.g {
        (c.b - c.r) / delta + 2.0
    } else {
        (c.r - c.g) / delta + 4.0
    };
    (sector / 6.0).rem_euclid(1.0)
}

/// Rebuild RGB from hue, chroma and the offset added to every channel.
fn from_hue_chroma(h: f32, chroma: f32, m: f32) -> Srgb {
    let h6 = h.rem_euclid(1.0) * 6.0;
    let sector = h6 as u32;
    let x = chroma * (1.0 - ((h6 % 2.0) - 1.0).abs());

    let (r, g, b) = match sector {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Srgb::new(r + m, g + m, b + m)
}

fn extremes(c: Srgb) -> (f32, f32) {
    (c.r.max(c.g).max(c.b), c.r.min(c.g).min(c.b))
}

impl From<Srgb> for Hsv {
    fn from(c: Srgb) -> Self {
        let (max, min) = extremes(c);
        let delta = max - min;
        let s = if max > 0.0 { delta / max } else { 0.0 };
        Self {
            h: unit_hue(c, max, delta),
            s,
            v: max,
        }
    }
}

impl From<Hsv> for Srgb {
    fn from(hsv: Hsv) -> Self {
        let chroma = hsv.v * hsv.s;
        from_hue_chroma(hsv.h, chroma, hsv.v - chroma)
    }
}

impl From<Srgb> for Hsl {
    fn from(c: Srgb) -> Self {
        let (max, min) = extremes(c);
        let delta = max - min;
        let l = (max + min) / 2.0;
        let s = if delta > 0.0 {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        } else {
            0.0
        };
        Self {
            h: unit_hue(c, max, delta),
            s,
            l,
        }
    }
}

impl From<Hsl> for Srgb {
    fn from(hsl: Hsl) -> Self {
        let chroma = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        from_hue_chroma(hsl.h, chroma, hsl.l - chroma / 2.0)
    }
}
