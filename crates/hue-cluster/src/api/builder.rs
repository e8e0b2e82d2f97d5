//! HueClusterer builder -- chains smoothing, peak detection and cluster
//! assignment over a raw hue histogram.

use crate::api::ClusterError;
use crate::clusters::ClusterMap;
use crate::histogram::HueHistogram;
use crate::peaks::{find_extrema, find_peaks, select_seeds};

/// Hue clustering configured by a prominence tolerance.
///
/// The raw histogram is first smoothed into a *working* histogram. Extremum
/// detection and the prominence test both run on that working histogram.
/// The smoothing width defaults to the tolerance itself, so an odd tolerance
/// is expected unless [`smoothing_width`](Self::smoothing_width) is set.
///
/// # Example
///
/// ```
/// use hue_cluster::{HueClusterer, HueHistogram};
///
/// let raw = HueHistogram::from_weighted_hues([(0, 1), (150, 3)]);
/// let clustering = HueClusterer::new(1).cluster(&raw).unwrap();
///
/// assert_eq!(clustering.peaks(), &[0, 150]);
/// assert_eq!(clustering.map().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueClusterer {
    tolerance: u32,
    smoothing_width: Option<usize>,
}

impl HueClusterer {
    /// Create a clusterer with the given tolerance; smoothing width follows it.
    pub fn new(tolerance: u32) -> Self {
        Self {
            tolerance,
            smoothing_width: None,
        }
    }

    /// Override the smoothing kernel width (odd, below 360).
    #[inline]
    pub fn smoothing_width(mut self, width: usize) -> Self {
        self.smoothing_width = Some(width);
        self
    }

    /// Minimum peak prominence.
    #[inline]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Kernel width that [`cluster`](Self::cluster) will smooth with.
    #[inline]
    pub fn effective_width(&self) -> usize {
        self.smoothing_width.unwrap_or(self.tolerance as usize)
    }

    /// Run smoothing, extremum detection, peak filtering and assignment.
    ///
    /// # Errors
    ///
    /// [`ClusterError::InvalidKernelWidth`] if the effective smoothing width
    /// is even, zero, or not below 360.
    pub fn cluster(&self, raw: &HueHistogram) -> Result<Clustering, ClusterError> {
        let working = raw.smooth(self.effective_width())?;
        let tolerance = f64::from(self.tolerance);

        let extrema = find_extrema(&working);
        let peaks = find_peaks(&working, tolerance);
        let map = ClusterMap::assign(&select_seeds(&working, tolerance))?;

        Ok(Clustering {
            working,
            extrema,
            peaks,
            map,
        })
    }
}

/// Intermediate and final products of one [`HueClusterer::cluster`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    working: HueHistogram,
    extrema: Vec<usize>,
    peaks: Vec<usize>,
    map: ClusterMap,
}

impl Clustering {
    /// The smoothed histogram used for detection.
    pub fn working_histogram(&self) -> &HueHistogram {
        &self.working
    }

    /// Alternating valley/peak list of the working histogram.
    pub fn extrema(&self) -> &[usize] {
        &self.extrema
    }

    /// Peaks that passed the prominence test (may be empty; the map then
    /// falls back to the highest bin).
    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    /// Hue to cluster assignment.
    pub fn map(&self) -> &ClusterMap {
        &self.map
    }

    /// Take ownership of the cluster map.
    pub fn into_map(self) -> ClusterMap {
        self.map
    }
}
