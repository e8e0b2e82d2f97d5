//! Assignment of hue bins to their nearest cluster seed.

use crate::api::ClusterError;
use crate::histogram::{circular_distance, HUE_BINS};

/// A partition of all 360 hue bins into clusters.
///
/// Cluster `k` is seeded by the `k`-th peak in ascending hue order. Each bin
/// belongs to the seed at the smallest circular distance; on an exact tie
/// the seed with the lower hue wins.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterMap {
    peaks: Vec<usize>,
    labels: [usize; HUE_BINS],
}

impl ClusterMap {
    /// Assign every hue bin to its nearest seed.
    ///
    /// Seeds are wrapped modulo 360, sorted, and deduplicated first.
    ///
    /// # Errors
    ///
    /// [`ClusterError::NoSeeds`] if `peaks` is empty.
    ///
    /// # Example
    /// ```
    /// use hue_cluster::ClusterMap;
    /// let map = ClusterMap::assign(&[150, 0]).unwrap();
    /// assert_eq!(map.peaks(), &[0, 150]);
    /// assert_eq!(map.cluster_of(10), 0);
    /// assert_eq!(map.cluster_of(140), 1);
    /// assert_eq!(map.cluster_of(75), 0); // tie: lower hue wins
    /// ```
    pub fn assign(peaks: &[usize]) -> Result<Self, ClusterError> {
        let mut peaks: Vec<usize> = peaks.iter().map(|p| p % HUE_BINS).collect();
        peaks.sort_unstable();
        peaks.dedup();

        if peaks.is_empty() {
            return Err(ClusterError::NoSeeds);
        }

        let mut labels = [0; HUE_BINS];
        for (hue, label) in labels.iter_mut().enumerate() {
            let mut best = 0;
            let mut best_distance = circular_distance(hue, peaks[0]);
            for (k, &peak) in peaks.iter().enumerate().skip(1) {
                let distance = circular_distance(hue, peak);
                if distance < best_distance {
                    best = k;
                    best_distance = distance;
                }
            }
            *label = best;
        }

        Ok(Self { peaks, labels })
    }

    /// Seed hues in ascending order; index = cluster id.
    #[inline]
    pub fn peaks(&self) -> &[usize] {
        &self.peaks
    }

    /// Number of clusters.
    #[inline]
    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    /// Always false; a map holds at least one cluster.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    /// Cluster id of a hue bin (wrapped modulo 360).
    #[inline]
    pub fn cluster_of(&self, hue: usize) -> usize {
        self.labels[hue % HUE_BINS]
    }

    /// Cluster id for every hue bin.
    #[inline]
    pub fn labels(&self) -> &[usize; HUE_BINS] {
        &self.labels
    }

    /// Hue bins owned by `cluster`, ascending.
    pub fn hues_of(&self, cluster: usize) -> impl Iterator<Item = usize> + '_ {
        (0..HUE_BINS).filter(move |&h| self.labels[h] == cluster)
    }
}
