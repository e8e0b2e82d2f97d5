use crate::error::DecomposeError;
use hue_cluster::{AberrationOptions, HueClusterer, HUE_BINS};
use serde::{Deserialize, Serialize};

/// Decomposition settings, usually loaded from YAML
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DecomposerConfig {
    /// Minimum peak prominence; also the smoothing width unless overridden
    #[serde(default = "default_tolerance")]
    pub tolerance: u32,

    /// Gaussian kernel width for histogram smoothing (odd, below 360)
    #[serde(default)]
    pub smoothing_width: Option<u32>,

    /// Run aberration reduction before clustering
    #[serde(default = "default_preprocessing")]
    pub preprocessing: bool,

    #[serde(default)]
    pub aberration: AberrationConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

fn default_tolerance() -> u32 {
    35
}

fn default_preprocessing() -> bool {
    true
}

/// Thresholds for aberration reduction, as fractions of full scale
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AberrationConfig {
    #[serde(default = "default_threshold")]
    pub saturation_threshold: f32,

    #[serde(default = "default_threshold")]
    pub lightness_threshold: f32,
}

fn default_threshold() -> f32 {
    0.2
}

impl Default for AberrationConfig {
    fn default() -> Self {
        Self {
            saturation_threshold: default_threshold(),
            lightness_threshold: default_threshold(),
        }
    }
}

impl From<&AberrationConfig> for AberrationOptions {
    fn from(config: &AberrationConfig) -> Self {
        AberrationOptions::new()
            .saturation_threshold(config.saturation_threshold)
            .lightness_threshold(config.lightness_threshold)
    }
}

/// How much the pipeline reports through `tracing`
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Off,
    #[default]
    Summary,
    Detailed,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiagnosticsConfig {
    #[serde(default)]
    pub level: DiagnosticLevel,
}

impl DiagnosticsConfig {
    pub fn new(level: DiagnosticLevel) -> Self {
        Self { level }
    }

    /// One event per pipeline stage
    pub fn summary(&self) -> bool {
        self.level >= DiagnosticLevel::Summary
    }

    /// Extrema and peak lists as well
    pub fn detailed(&self) -> bool {
        self.level >= DiagnosticLevel::Detailed
    }
}

impl Default for DecomposerConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            smoothing_width: None,
            preprocessing: default_preprocessing(),
            aberration: AberrationConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl DecomposerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, DecomposeError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        tracing::debug!(
            tolerance = config.tolerance,
            smoothing_width = config.effective_smoothing_width(),
            preprocessing = config.preprocessing,
            "Loaded decomposer configuration"
        );
        Ok(config)
    }

    pub fn tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn smoothing_width(mut self, width: u32) -> Self {
        self.smoothing_width = Some(width);
        self
    }

    pub fn preprocessing(mut self, enabled: bool) -> Self {
        self.preprocessing = enabled;
        self
    }

    pub fn aberration(mut self, aberration: AberrationConfig) -> Self {
        self.aberration = aberration;
        self
    }

    pub fn diagnostics(mut self, level: DiagnosticLevel) -> Self {
        self.diagnostics = DiagnosticsConfig::new(level);
        self
    }

    /// Kernel width actually used for smoothing
    pub fn effective_smoothing_width(&self) -> u32 {
        self.smoothing_width.unwrap_or(self.tolerance)
    }

    /// Check tolerance, kernel width and thresholds
    pub fn validate(&self) -> Result<(), DecomposeError> {
        if self.tolerance == 0 {
            return Err(DecomposeError::InvalidTolerance(self.tolerance));
        }

        let width = self.effective_smoothing_width();
        if width % 2 == 0 || width as usize >= HUE_BINS {
            return Err(DecomposeError::InvalidSmoothingWidth(width));
        }

        for (name, value) in [
            ("saturation", self.aberration.saturation_threshold),
            ("lightness", self.aberration.lightness_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DecomposeError::InvalidThreshold { name, value });
            }
        }

        Ok(())
    }

    /// Core clusterer matching these settings
    pub fn clusterer(&self) -> HueClusterer {
        let clusterer = HueClusterer::new(self.tolerance);
        match self.smoothing_width {
            Some(width) => clusterer.smoothing_width(width as usize),
            None => clusterer,
        }
    }
}
