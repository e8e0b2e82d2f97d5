use hue_cluster::ClusterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecomposeError {
    #[error("Image has no pixels")]
    EmptyImage,

    #[error("Invalid tolerance: {0} (must be positive)")]
    InvalidTolerance(u32),

    #[error("Invalid smoothing width: {0} (must be odd and below 360)")]
    InvalidSmoothingWidth(u32),

    #[error("Invalid {name} threshold: {value} (must be within 0..=1)")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("Quality evaluation needs at least one ground-truth mask")]
    MissingGroundTruth,

    #[error("Mask {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    MaskDimensions {
        index: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("Clustering error: {0}")]
    Cluster(#[from] ClusterError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
