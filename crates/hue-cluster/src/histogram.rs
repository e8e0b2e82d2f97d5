//! Circular hue histogram.
//!
//! 360 bins indexed by integer hue angle. Bin 359 is adjacent to bin 0, and
//! every index computation in this crate wraps explicitly modulo
//! [`HUE_BINS`].

use crate::api::ClusterError;
use crate::color::LinearRgb;
use crate::projection::project;

/// Number of hue bins (one per degree).
pub const HUE_BINS: usize = 360;

/// Wrap a signed bin index onto `0..HUE_BINS`.
#[inline]
pub fn wrap(index: isize) -> usize {
    index.rem_euclid(HUE_BINS as isize) as usize
}

/// Shortest distance between two hue bins around the circle.
///
/// # Example
/// ```
/// use hue_cluster::circular_distance;
/// assert_eq!(circular_distance(350, 10), 20);
/// assert_eq!(circular_distance(10, 350), 20);
/// assert_eq!(circular_distance(0, 180), 180);
/// ```
#[inline]
pub fn circular_distance(a: usize, b: usize) -> usize {
    let d = a.abs_diff(b) % HUE_BINS;
    d.min(HUE_BINS - d)
}

/// Normalized Gaussian weights for an odd kernel width.
///
/// σ follows the usual width rule `0.3·((w − 1)/2 − 1) + 0.8`, so width 1
/// yields the identity kernel `[1.0]`.
///
/// # Errors
///
/// [`ClusterError::InvalidKernelWidth`] if `width` is even, zero, or not
/// smaller than [`HUE_BINS`].
pub fn gaussian_kernel(width: usize) -> Result<Vec<f64>, ClusterError> {
    if width % 2 == 0 || width >= HUE_BINS {
        return Err(ClusterError::InvalidKernelWidth { width });
    }

    let sigma = 0.3 * ((width as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let radius = (width / 2) as f64;
    let mut kernel: Vec<f64> = (0..width)
        .map(|i| {
            let x = i as f64 - radius;
            (-(x * x) / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    Ok(kernel)
}

/// A 360-bin circular histogram of hue angles weighted by pixel counts.
#[derive(Debug, Clone, PartialEq)]
pub struct HueHistogram {
    bins: [f64; HUE_BINS],
}

impl Default for HueHistogram {
    fn default() -> Self {
        Self {
            bins: [0.0; HUE_BINS],
        }
    }
}

impl HueHistogram {
    /// An empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap existing bin values.
    pub fn from_bins(bins: [f64; HUE_BINS]) -> Self {
        Self { bins }
    }

    /// Accumulate `(hue, count)` pairs. Hues are wrapped modulo 360.
    ///
    /// # Example
    /// ```
    /// use hue_cluster::HueHistogram;
    /// let hist = HueHistogram::from_weighted_hues([(10, 3), (10, 2), (370, 1)]);
    /// assert_eq!(hist.get(10), 6.0);
    /// ```
    pub fn from_weighted_hues<I>(hues: I) -> Self
    where
        I: IntoIterator<Item = (usize, u64)>,
    {
        let mut hist = Self::new();
        for (hue, count) in hues {
            hist.add(hue, count as f64);
        }
        hist
    }

    /// Project every distinct color and accumulate its count at its hue.
    ///
    /// # Example
    /// ```
    /// use hue_cluster::HueHistogram;
    /// let hist = HueHistogram::from_color_counts([([255, 0, 0], 3), ([255, 255, 255], 1)]);
    /// assert_eq!(hist.get(150), 3.0);
    /// assert_eq!(hist.get(0), 1.0);
    /// ```
    pub fn from_color_counts<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = ([u8; 3], u64)>,
    {
        Self::from_weighted_hues(
            colors
                .into_iter()
                .map(|(rgb, count)| (project(LinearRgb::from_bytes(rgb)).hue(), count)),
        )
    }

    /// Add `weight` to bin `hue mod 360`.
    #[inline]
    pub fn add(&mut self, hue: usize, weight: f64) {
        self.bins[hue % HUE_BINS] += weight;
    }

    /// Bin value with circular indexing.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.bins[index % HUE_BINS]
    }

    /// All bin values.
    #[inline]
    pub fn bins(&self) -> &[f64; HUE_BINS] {
        &self.bins
    }

    /// Sum over all bins.
    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// True when every bin holds the same value.
    pub fn is_constant(&self) -> bool {
        self.bins.iter().all(|&v| v == self.bins[0])
    }

    /// Index of the highest bin; the lowest index wins ties.
    pub fn argmax(&self) -> usize {
        let mut best = 0;
        for (i, &v) in self.bins.iter().enumerate() {
            if v > self.bins[best] {
                best = i;
            }
        }
        best
    }

    /// Circular Gaussian blur with the given odd kernel width.
    ///
    /// The kernel is centered on each bin (no phase shift) and wraps across
    /// the 359/0 boundary instead of zero-padding. Total mass is preserved.
    ///
    /// # Errors
    ///
    /// See [`gaussian_kernel`].
    pub fn smooth(&self, width: usize) -> Result<Self, ClusterError> {
        let kernel = gaussian_kernel(width)?;
        let radius = (width / 2) as isize;

        let mut bins = [0.0; HUE_BINS];
        for (i, out) in bins.iter_mut().enumerate() {
            *out = kernel
                .iter()
                .enumerate()
                .map(|(k, w)| w * self.bins[wrap(i as isize + k as isize - radius)])
                .sum();
        }
        Ok(Self { bins })
    }
}
