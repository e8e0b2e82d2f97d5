#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! hue-cluster: hue-based color clustering for scanned documents
//!
//! Printed documents use a handful of inks. Under a scanner each ink spreads
//! into a cloud of nearby colors, but the *hue* of that cloud stays put. This
//! crate finds those hues and partitions the color wheel around them.
//!
//! # Pipeline
//!
//! ```text
//! sRGB u8 ──► [reduce_aberration] ──► LinearRgb ──► project ──► hue (0..360)
//!                                                                 │
//!          ClusterMap ◄── select_seeds ◄── find_peaks ◄── smooth ◄┘ HueHistogram
//! ```
//!
//! # Quick Start
//!
//! ```
//! use hue_cluster::{HueClusterer, HueHistogram};
//!
//! // three red pixels and one white pixel
//! let hist = HueHistogram::from_color_counts([([255, 0, 0], 3), ([255, 255, 255], 1)]);
//! let clustering = HueClusterer::new(1).cluster(&hist).unwrap();
//!
//! assert_eq!(clustering.map().peaks(), &[0, 150]);
//! ```
//!
//! # Projection
//!
//! Linear RGB colors are projected through white `(1, 1, 1)` onto the plane
//! through the origin with normal `(1, 1, 1)/√3`. Every neutral color lands on
//! the origin, so grays, black and white share hue 0. Scaling a color's
//! intensity does not move its projected hue.
//!
//! # Circular Histograms
//!
//! Hue bins form a circle: smoothing wraps across 359/0, flat runs may
//! straddle the boundary, and distances are measured the short way round.

pub mod api;
pub mod clusters;
pub mod color;
pub mod histogram;
pub mod peaks;
pub mod preprocess;
pub mod projection;


pub use api::{ClusterError, Clustering, HueClusterer};
pub use clusters::ClusterMap;
pub use color::{LinearRgb, PackedRgb, Srgb};
pub use histogram::{circular_distance, gaussian_kernel, HueHistogram, HUE_BINS};
pub use peaks::{find_extrema, find_peaks, select_seeds};
pub use preprocess::{reduce_aberration, AberrationOptions};
pub use projection::{project, ChromaPoint};
