//! Extremum and peak detection on the circular hue histogram.
//!
//! # Extrema
//!
//! With forward differences `delta[i] = h[i + 1] − h[i]` (indices mod 360),
//! bin `i` is an extremum when `delta[i − 1]` and `delta[i]` have opposite
//! signs. A flat run is an extremum when the deltas entering and leaving it
//! have opposite signs; it is reported once, at the middle of the run. Runs
//! may straddle the 359/0 boundary.
//!
//! The sorted list is rotated by one when needed so that it starts on a
//! valley. On a circle valleys and peaks alternate, so peaks sit at the odd
//! positions.
//!
//! # Peaks
//!
//! A peak survives when it rises at least `tolerance` above *both*
//! neighboring valleys.

use crate::histogram::{HueHistogram, HUE_BINS};

#[inline]
fn opposite_signs(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// Find all local extrema, ascending by hue and rotated to start on a valley.
///
/// Returns an empty list for a constant histogram. Otherwise the list has
/// even length ≥ 2 and alternates valley, peak, valley, peak, ...
///
/// # Example
/// ```
/// use hue_cluster::{find_extrema, HueHistogram};
/// let hist = HueHistogram::from_weighted_hues([(0, 1), (150, 3)]);
/// assert_eq!(find_extrema(&hist), vec![75, 150, 255, 0]);
/// ```
pub fn find_extrema(hist: &HueHistogram) -> Vec<usize> {
    let h = hist.bins();
    let mut extrema = Vec::new();

    let mut prev_delta = h[0] - h[HUE_BINS - 1];
    for i in 0..HUE_BINS {
        let delta = h[(i + 1) % HUE_BINS] - h[i];

        if prev_delta != 0.0 && delta == 0.0 {
            // flat run h[i..j], bounded so a run never laps the circle
            let mut j = i + 1;
            while j < i + HUE_BINS && h[j % HUE_BINS] == h[i] {
                j += 1;
            }
            let next_delta = h[j % HUE_BINS] - h[i];

            if opposite_signs(prev_delta, next_delta) {
                extrema.push(((i + j - 1) / 2) % HUE_BINS);
            }
        } else if opposite_signs(prev_delta, delta) {
            extrema.push(i);
        }

        prev_delta = delta;
    }

    extrema.sort_unstable();
    extrema.dedup();

    if extrema.len() >= 2 && hist.get(extrema[0]) > hist.get(extrema[1]) {
        let len = extrema.len();
        extrema = (0..len).map(|k| extrema[(k + 1) % len]).collect();
    }

    extrema
}

/// Peaks whose height above both neighboring valleys is at least `tolerance`.
///
/// Returns hue indices sorted ascending; empty when the histogram has fewer
/// than two extrema or no peak is prominent enough.
///
/// # Example
/// ```
/// use hue_cluster::{find_peaks, HueHistogram};
/// let hist = HueHistogram::from_weighted_hues([(0, 1), (150, 3)]);
/// assert_eq!(find_peaks(&hist, 1.0), vec![0, 150]);
/// assert_eq!(find_peaks(&hist, 2.0), vec![150]);
/// ```
pub fn find_peaks(hist: &HueHistogram, tolerance: f64) -> Vec<usize> {
    let extrema = find_extrema(hist);
    let len = extrema.len();
    if len < 2 {
        return Vec::new();
    }

    let mut peaks: Vec<usize> = (1..len)
        .step_by(2)
        .filter_map(|k| {
            let top = hist.get(extrema[k]);
            let left = top - hist.get(extrema[k - 1]);
            let right = top - hist.get(extrema[(k + 1) % len]);
            (left.min(right) >= tolerance).then_some(extrema[k])
        })
        .collect();

    peaks.sort_unstable();
    peaks
}

/// Cluster seeds: the surviving peaks, or the single highest bin when no
/// peak survives (flat, single-hue, or over-tolerant cases).
///
/// Never returns an empty list.
///
/// # Example
/// ```
/// use hue_cluster::{select_seeds, HueHistogram};
/// let hist = HueHistogram::from_weighted_hues([(42, 2)]);
/// assert_eq!(select_seeds(&hist, 100.0), vec![42]);
/// ```
pub fn select_seeds(hist: &HueHistogram, tolerance: f64) -> Vec<usize> {
    let peaks = find_peaks(hist, tolerance);
    if peaks.is_empty() {
        vec![hist.argmax()]
    } else {
        peaks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_from(pairs: &[(usize, f64)]) -> HueHistogram {
        let mut hist = HueHistogram::new();
        for &(i, v) in pairs {
            hist.add(i, v);
        }
        hist
    }

    #[test]
    fn test_constant_histogram_has_no_extrema() {
        assert!(find_extrema(&HueHistogram::new()).is_empty());
        assert!(find_extrema(&HueHistogram::from_bins([4.0; HUE_BINS])).is_empty());
        assert!(find_peaks(&HueHistogram::new(), 0.0).is_empty());
    }

    #[test]
    fn test_single_spike() {
        let hist = hist_from(&[(100, 5.0)]);
        // valley at the middle of the zero run 101..=459
        assert_eq!(find_extrema(&hist), vec![280, 100]);
        assert_eq!(find_peaks(&hist, 5.0), vec![100]);
        assert!(find_peaks(&hist, 5.5).is_empty());
    }

    #[test]
    fn test_simple_sign_changes() {
        let mut bins = [0.0; HUE_BINS];
        for (i, b) in bins.iter_mut().enumerate() {
            // two smooth humps centered at 90 and 270
            *b = 10.0 + 5.0 * ((i as f64) * 2.0 * std::f64::consts::PI / 180.0).sin();
        }
        let hist = HueHistogram::from_bins(bins);
        let extrema = find_extrema(&hist);
        assert_eq!(extrema.len(), 4);
        assert!(hist.get(extrema[0]) < hist.get(extrema[1]));
        assert_eq!(find_peaks(&hist, 1.0), vec![45, 225]);
    }

    #[test]
    fn test_plateau_peak_reported_at_midpoint() {
        let hist = hist_from(&[(10, 4.0), (11, 4.0), (12, 4.0), (13, 4.0), (14, 4.0)]);
        let peaks = find_peaks(&hist, 1.0);
        assert_eq!(peaks, vec![12]);
    }

    #[test]
    fn test_monotone_step_is_not_an_extremum() {
        // 1 -> 2 -> 2 -> 3 rising run with a flat step, then a drop
        let hist = hist_from(&[(50, 1.0), (51, 2.0), (52, 2.0), (53, 3.0)]);
        let extrema = find_extrema(&hist);
        assert!(!extrema.contains(&51));
        assert!(!extrema.contains(&52));
        assert!(extrema.contains(&53));
    }

    #[test]
    fn test_first_extremum_is_valley_after_rotation() {
        // sorted extrema would start with the peak at 0
        let hist = hist_from(&[(0, 9.0), (200, 3.0)]);
        let extrema = find_extrema(&hist);
        assert!(hist.get(extrema[0]) < hist.get(extrema[1]));
        assert_eq!(extrema.len() % 2, 0);
    }

    #[test]
    fn test_select_seeds_falls_back_to_argmax() {
        assert_eq!(select_seeds(&HueHistogram::new(), 1.0), vec![0]);
        let hist = hist_from(&[(30, 1.0), (300, 2.0)]);
        assert_eq!(select_seeds(&hist, 50.0), vec![300]);
    }

    #[test]
    fn test_two_color_scene() {
        // white at bin 0 (x1), red at bin 150 (x3)
        let hist = hist_from(&[(0, 1.0), (150, 3.0)]);
        assert_eq!(find_extrema(&hist), vec![75, 150, 255, 0]);
        assert_eq!(find_peaks(&hist, 1.0), vec![0, 150]);
    }
}
