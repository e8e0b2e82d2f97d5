//! Error type for the hue-cluster public API.

use std::fmt;

/// Errors raised while smoothing or clustering a hue histogram.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterError {
    /// Smoothing kernel width is even, zero, or not below 360
    InvalidKernelWidth {
        /// The rejected width
        width: usize,
    },
    /// Cluster assignment was given no seeds
    NoSeeds,
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::InvalidKernelWidth { width } => {
                write!(
                    f,
                    "invalid smoothing kernel width {} (expected an odd value below 360)",
                    width
                )
            }
            ClusterError::NoSeeds => write!(f, "cluster assignment needs at least one seed"),
        }
    }
}

impl std::error::Error for ClusterError {}
