use crate::error::DecomposeError;
use crate::models::{ColorTable, DecomposerConfig};
use crate::rendering::diagnostics::{self, DecompositionReport, SCATTER_3D_LIMIT};
use crate::services::materialize::{build_layers, build_masks, pixel_labels, pixel_triples};
use crate::services::quality::panoptic_quality;
use hue_cluster::{
    project, reduce_aberration, AberrationOptions, ChromaPoint, ClusterMap, Clustering,
    HueHistogram, LinearRgb,
};
use image::{GrayImage, RgbImage};

/// Splits a scanned document into one layer per dominant ink hue.
///
/// All stages run eagerly in [`new`](Self::new); the accessors only hand out
/// the results. Clusters are ordered by ascending peak hue, and `masks()[k]`,
/// `layers()[k]` and `cluster_map().peaks()[k]` describe the same cluster.
pub struct DocColorDecomposer {
    config: DecomposerConfig,
    width: u32,
    height: u32,
    table: ColorTable,
    projections: Vec<ChromaPoint>,
    hues: Vec<usize>,
    histogram: HueHistogram,
    clustering: Clustering,
    labels: Vec<usize>,
    masks: Vec<GrayImage>,
    layers: Vec<RgbImage>,
}

impl DocColorDecomposer {
    pub fn new(image: &RgbImage, config: DecomposerConfig) -> Result<Self, DecomposeError> {
        config.validate()?;

        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(DecomposeError::EmptyImage);
        }

        let diagnostics = config.diagnostics;
        let span = tracing::info_span!("decompose", width, height);
        let _guard = span.enter();

        let source = pixel_triples(image);
        let working = if config.preprocessing {
            let options = AberrationOptions::from(&config.aberration);
            let reduced = reduce_aberration(&source, &options);
            if diagnostics.summary() {
                let changed = source.iter().zip(&reduced).filter(|(a, b)| a != b).count();
                tracing::info!(changed, "Reduced chromatic aberration");
            }
            reduced
        } else {
            source
        };

        let table = ColorTable::from_pixels(&working, width as usize);
        let projections: Vec<ChromaPoint> = table
            .entries()
            .iter()
            .map(|e| project(LinearRgb::from_bytes(e.bytes())))
            .collect();
        let hues: Vec<usize> = projections.iter().map(|p| p.hue()).collect();
        if diagnostics.summary() {
            tracing::info!(colors = table.len(), "Projected distinct colors");
        }

        let histogram = HueHistogram::from_weighted_hues(
            hues.iter()
                .copied()
                .zip(table.entries().iter().map(|e| e.count)),
        );
        let clustering = config.clusterer().cluster(&histogram)?;
        if diagnostics.summary() {
            tracing::info!(
                extrema = clustering.extrema().len(),
                peaks = clustering.peaks().len(),
                clusters = clustering.map().len(),
                "Clustered hue histogram"
            );
        }
        if diagnostics.detailed() {
            tracing::debug!(extrema = ?clustering.extrema(), "Extrema");
            tracing::debug!(peaks = ?clustering.peaks(), seeds = ?clustering.map().peaks(), "Peaks");
        }

        let clusters = clustering.map().len();
        let labels = pixel_labels(&working, &table, &hues, clustering.map());
        let masks = build_masks(&labels, clusters, width, height);
        let layers = build_layers(&labels, clusters, image);
        if diagnostics.summary() {
            tracing::info!(layers = layers.len(), "Materialized masks and layers");
        }

        Ok(Self {
            config,
            width,
            height,
            table,
            projections,
            hues,
            histogram,
            clustering,
            labels,
            masks,
            layers,
        })
    }

    pub fn config(&self) -> &DecomposerConfig {
        &self.config
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of clusters (and of masks and layers)
    pub fn cluster_count(&self) -> usize {
        self.clustering.map().len()
    }

    pub fn layers(&self) -> &[RgbImage] {
        &self.layers
    }

    pub fn masks(&self) -> &[GrayImage] {
        &self.masks
    }

    pub fn cluster_map(&self) -> &ClusterMap {
        self.clustering.map()
    }

    /// Raw count-weighted hue histogram
    pub fn histogram(&self) -> &HueHistogram {
        &self.histogram
    }

    /// Smoothed histogram used for peak detection
    pub fn working_histogram(&self) -> &HueHistogram {
        self.clustering.working_histogram()
    }

    pub fn extrema(&self) -> &[usize] {
        self.clustering.extrema()
    }

    pub fn peaks(&self) -> &[usize] {
        self.clustering.peaks()
    }

    /// Distinct working colors and their counts
    pub fn color_table(&self) -> &ColorTable {
        &self.table
    }

    /// Projected point per entry of [`color_table`](Self::color_table)
    pub fn projections(&self) -> &[ChromaPoint] {
        &self.projections
    }

    /// Hue per entry of [`color_table`](Self::color_table)
    pub fn hues(&self) -> &[usize] {
        &self.hues
    }

    /// Cluster id of every pixel in row-major order
    pub fn pixel_labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn report(&self) -> DecompositionReport {
        let map = self.cluster_map();
        DecompositionReport {
            width: self.width,
            height: self.height,
            tolerance: self.config.tolerance,
            smoothing_width: self.config.effective_smoothing_width(),
            histogram: self.histogram.bins().to_vec(),
            working_histogram: self.working_histogram().bins().to_vec(),
            extrema: self.extrema().to_vec(),
            peaks: self.peaks().to_vec(),
            labels: map.labels().to_vec(),
            clusters: diagnostics::cluster_summaries(&self.table, &self.hues, map),
            hue_colors: diagnostics::hue_mean_colors(&self.table, &self.hues),
            scatter_2d: diagnostics::scatter_2d(&self.table, &self.projections),
            scatter_3d: diagnostics::scatter_3d(&self.table, SCATTER_3D_LIMIT),
        }
    }

    /// Panoptic quality of the produced masks against `truth`.
    ///
    /// Truth masks must match the source dimensions; non-zero pixels are
    /// foreground.
    pub fn compute_quality(&self, truth: &[GrayImage]) -> Result<f64, DecomposeError> {
        if truth.is_empty() {
            return Err(DecomposeError::MissingGroundTruth);
        }
        for (index, mask) in truth.iter().enumerate() {
            let (width, height) = mask.dimensions();
            if (width, height) != (self.width, self.height) {
                return Err(DecomposeError::MaskDimensions {
                    index,
                    width,
                    height,
                    expected_width: self.width,
                    expected_height: self.height,
                });
            }
        }

        let score = panoptic_quality(&self.masks, truth).ok_or(DecomposeError::MissingGroundTruth)?;
        if self.config.diagnostics.summary() {
            tracing::info!(score, truth_masks = truth.len(), "Computed panoptic quality");
        }
        Ok(score)
    }
}
