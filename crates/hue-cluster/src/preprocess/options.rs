//! Aberration reduction options.

/// Thresholds for [`reduce_aberration`](super::reduce_aberration).
///
/// Both thresholds are fractions of full scale (0.0..=1.0). A channel value
/// at or below its threshold is zeroed.
///
/// # Defaults
///
/// - Saturation threshold: 0.2 (faint color fringes become neutral)
/// - Lightness threshold: 0.2 (near-black ink becomes pure black)
///
/// # Example
///
/// ```
/// use hue_cluster::AberrationOptions;
///
/// let options = AberrationOptions::new()
///     .saturation_threshold(0.1)
///     .lightness_threshold(0.3);
/// assert_eq!(options.saturation_threshold, 0.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AberrationOptions {
    /// HSV saturation at or below which a pixel is desaturated.
    pub saturation_threshold: f32,

    /// HSL lightness at or below which a pixel is set to black.
    pub lightness_threshold: f32,
}

impl Default for AberrationOptions {
    fn default() -> Self {
        Self {
            saturation_threshold: 0.2,
            lightness_threshold: 0.2,
        }
    }
}

impl AberrationOptions {
    /// Create options with default thresholds.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HSV saturation threshold (clamped to 0.0..=1.0).
    #[inline]
    pub fn saturation_threshold(mut self, threshold: f32) -> Self {
        self.saturation_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the HSL lightness threshold (clamped to 0.0..=1.0).
    #[inline]
    pub fn lightness_threshold(mut self, threshold: f32) -> Self {
        self.lightness_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}
