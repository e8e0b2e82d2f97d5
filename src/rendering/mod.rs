pub mod diagnostics;

pub use diagnostics::{ClusterSummary, DecompositionReport, LinearPoint, ProjectedPoint};
