//! Plot-ready diagnostic data for a decomposition.
//!
//! Nothing here draws; the report carries the histograms, the cluster
//! assignment and the scatter point sets that an external plotter needs.

use crate::error::DecomposeError;
use crate::models::ColorTable;
use hue_cluster::{ChromaPoint, ClusterMap, LinearRgb, HUE_BINS};
use serde::Serialize;

/// Colors included in the 3D scatter, by descending frequency
pub const SCATTER_3D_LIMIT: usize = 5000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub id: usize,
    pub peak_hue: usize,
    pub hue_bins: usize,
    pub pixel_count: u64,
    /// Frequency-weighted mean sRGB of member colors; `None` for an empty cluster
    pub mean_color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub alpha: f64,
    pub beta: f64,
    pub color: [u8; 3],
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearPoint {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub color: [u8; 3],
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecompositionReport {
    pub width: u32,
    pub height: u32,
    pub tolerance: u32,
    pub smoothing_width: u32,
    pub histogram: Vec<f64>,
    pub working_histogram: Vec<f64>,
    pub extrema: Vec<usize>,
    pub peaks: Vec<usize>,
    pub labels: Vec<usize>,
    pub clusters: Vec<ClusterSummary>,
    pub hue_colors: Vec<Option<[u8; 3]>>,
    pub scatter_2d: Vec<ProjectedPoint>,
    pub scatter_3d: Vec<LinearPoint>,
}

impl DecompositionReport {
    pub fn to_json(&self) -> Result<String, DecomposeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Running count-weighted channel sums
#[derive(Debug, Clone, Copy, Default)]
struct ColorSum {
    channels: [u64; 3],
    count: u64,
}

impl ColorSum {
    fn add(&mut self, rgb: [u8; 3], count: u64) {
        for (sum, &c) in self.channels.iter_mut().zip(&rgb) {
            *sum += u64::from(c) * count;
        }
        self.count += count;
    }

    fn mean(&self) -> Option<[u8; 3]> {
        if self.count == 0 {
            return None;
        }
        let half = self.count / 2;
        Some(self.channels.map(|sum| ((sum + half) / self.count) as u8))
    }
}

/// Per-cluster statistics, in cluster id order.
///
/// `hues` is aligned with `table.entries()`.
pub fn cluster_summaries(table: &ColorTable, hues: &[usize], map: &ClusterMap) -> Vec<ClusterSummary> {
    let mut sums = vec![ColorSum::default(); map.len()];
    for ((rgb, count), &hue) in table.color_counts().zip(hues) {
        sums[map.cluster_of(hue)].add(rgb, count);
    }

    map.peaks()
        .iter()
        .zip(&sums)
        .enumerate()
        .map(|(id, (&peak_hue, sum))| ClusterSummary {
            id,
            peak_hue,
            hue_bins: map.hues_of(id).count(),
            pixel_count: sum.count,
            mean_color: sum.mean(),
        })
        .collect()
}

/// Weighted mean color of every hue bin; `None` where no color falls.
pub fn hue_mean_colors(table: &ColorTable, hues: &[usize]) -> Vec<Option<[u8; 3]>> {
    let mut sums = vec![ColorSum::default(); HUE_BINS];
    for ((rgb, count), &hue) in table.color_counts().zip(hues) {
        sums[hue % HUE_BINS].add(rgb, count);
    }
    sums.iter().map(ColorSum::mean).collect()
}

/// Projected point of every distinct color.
pub fn scatter_2d(table: &ColorTable, projections: &[ChromaPoint]) -> Vec<ProjectedPoint> {
    table
        .entries()
        .iter()
        .zip(projections)
        .map(|(entry, point)| ProjectedPoint {
            alpha: point.alpha,
            beta: point.beta,
            color: entry.bytes(),
            count: entry.count,
        })
        .collect()
}

/// Linear RGB position of the most frequent colors.
pub fn scatter_3d(table: &ColorTable, limit: usize) -> Vec<LinearPoint> {
    table
        .most_frequent(limit)
        .into_iter()
        .map(|entry| {
            let linear = LinearRgb::from_bytes(entry.bytes());
            LinearPoint {
                r: linear.r,
                g: linear.g,
                b: linear.b,
                color: entry.bytes(),
                count: entry.count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_cluster::project;

    fn table_and_hues(pixels: &[[u8; 3]]) -> (ColorTable, Vec<usize>) {
        let table = ColorTable::from_pixels(pixels, pixels.len());
        let hues = table
            .color_counts()
            .map(|(rgb, _)| project(LinearRgb::from_bytes(rgb)).hue())
            .collect();
        (table, hues)
    }

    #[test]
    fn test_cluster_summaries() {
        let (table, hues) = table_and_hues(&[[255, 0, 0], [255, 0, 0], [200, 0, 0], [255, 255, 255]]);
        let map = ClusterMap::assign(&[0, 150]).unwrap();
        let summaries = cluster_summaries(&table, &hues, &map);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].peak_hue, 0);
        assert_eq!(summaries[0].pixel_count, 1);
        assert_eq!(summaries[0].mean_color, Some([255, 255, 255]));
        assert_eq!(summaries[1].pixel_count, 3);
        // (255 + 255 + 200) / 3 = 236.67
        assert_eq!(summaries[1].mean_color, Some([237, 0, 0]));
        assert_eq!(summaries[0].hue_bins + summaries[1].hue_bins, HUE_BINS);
    }

    #[test]
    fn test_empty_cluster_has_no_mean() {
        let (table, hues) = table_and_hues(&[[255, 0, 0]]);
        let map = ClusterMap::assign(&[150, 300]).unwrap();
        let summaries = cluster_summaries(&table, &hues, &map);
        assert_eq!(summaries[1].pixel_count, 0);
        assert_eq!(summaries[1].mean_color, None);
    }

    #[test]
    fn test_hue_mean_colors() {
        let (table, hues) = table_and_hues(&[[255, 0, 0], [0, 0, 0]]);
        let colors = hue_mean_colors(&table, &hues);
        assert_eq!(colors.len(), HUE_BINS);
        assert_eq!(colors[150], Some([255, 0, 0]));
        assert_eq!(colors[0], Some([0, 0, 0]));
        assert_eq!(colors[90], None);
    }

    #[test]
    fn test_scatter_3d_is_capped() {
        let pixels: Vec<[u8; 3]> = (0..=255u8).map(|v| [v, 0, 0]).collect();
        let (table, _) = table_and_hues(&pixels);
        assert_eq!(scatter_3d(&table, 10).len(), 10);
        assert_eq!(scatter_3d(&table, SCATTER_3D_LIMIT).len(), 256);
    }
}
