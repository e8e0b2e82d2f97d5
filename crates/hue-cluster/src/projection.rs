//! Central projection of linear RGB onto the chromatic plane.
//!
//! A color `p` is projected from the white point `W = (1, 1, 1)` along the
//! ray `W + t·(p − W)` until it meets the plane through the origin
//! orthogonal to the neutral axis `n = (1, 1, 1)/√3`:
//!
//! ```text
//! proj = W − (n·W / n·(p − W)) · (p − W)
//! ```
//!
//! The projected point is then expressed in an orthonormal basis of that
//! plane:
//!
//! ```text
//! α = (−r + g) / √2
//! β = ( r + g − 2b) / √6
//! ```
//!
//! Every neutral color (black, any gray, white) lands on the origin, so the
//! hue angle depends on chromaticity only.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use crate::color::LinearRgb;
use crate::histogram::HUE_BINS;

const FRAC_1_SQRT_3: f64 = 0.577_350_269_189_625_8;
const FRAC_1_SQRT_6: f64 = 0.408_248_290_463_863;

/// A point on the chromatic plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromaPoint {
    pub alpha: f64,
    pub beta: f64,
}

impl ChromaPoint {
    /// The origin, where all neutral colors project.
    pub const ORIGIN: ChromaPoint = ChromaPoint {
        alpha: 0.0,
        beta: 0.0,
    };

    /// Integer hue angle in `0..360`:
    /// `round(atan2(β, α) · 180/π + 360) mod 360`.
    ///
    /// The origin maps to hue 0.
    ///
    /// # Example
    /// ```
    /// use hue_cluster::ChromaPoint;
    /// let p = ChromaPoint { alpha: 0.0, beta: 1.0 };
    /// assert_eq!(p.hue(), 90);
    /// assert_eq!(ChromaPoint::ORIGIN.hue(), 0);
    /// ```
    pub fn hue(self) -> usize {
        let degrees = (self.beta.atan2(self.alpha) * 180.0 / PI + 360.0).round() as i64;
        degrees.rem_euclid(HUE_BINS as i64) as usize
    }
}

/// Project a linear RGB color onto the chromatic plane.
///
/// Returns [`ChromaPoint::ORIGIN`] exactly when the displacement from white
/// has no component along the neutral axis (the color *is* white), so there
/// is no division by zero.
///
/// # Example
/// ```
/// use hue_cluster::{project, ChromaPoint, LinearRgb};
/// assert_eq!(project(LinearRgb::new(1.0, 1.0, 1.0)), ChromaPoint::ORIGIN);
/// ```
pub fn project(color: LinearRgb) -> ChromaPoint {
    let [r, g, b] = color.to_f64();
    let d = [r - 1.0, g - 1.0, b - 1.0];

    let along_neutral = FRAC_1_SQRT_3 * (d[0] + d[1] + d[2]);
    if along_neutral == 0.0 {
        return ChromaPoint::ORIGIN;
    }

    // n·W = 3/√3
    let scale = 3.0 * FRAC_1_SQRT_3 / along_neutral;
    let pr = 1.0 - scale * d[0];
    let pg = 1.0 - scale * d[1];
    let pb = 1.0 - scale * d[2];

    ChromaPoint {
        alpha: FRAC_1_SQRT_2 * (pg - pr),
        beta: FRAC_1_SQRT_6 * (pr + pg - 2.0 * pb),
    }
}
