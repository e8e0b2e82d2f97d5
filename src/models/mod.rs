pub mod color_table;
pub mod config;

pub use color_table::{ColorEntry, ColorTable};
pub use config::{AberrationConfig, DecomposerConfig, DiagnosticLevel, DiagnosticsConfig};
