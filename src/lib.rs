//! Doc Color Decomposer
//!
//! Splits scanned documents into per-ink color layers by clustering the hue
//! histogram of their colors. The color math lives in the `hue-cluster`
//! crate; this library adds image handling, configuration, quality scoring
//! and diagnostics export.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::DecomposeError;
pub use models::{DecomposerConfig, DiagnosticLevel};
pub use services::DocColorDecomposer;
