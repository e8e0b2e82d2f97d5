//! Public API for the hue-cluster crate.
//!
//! This module provides the [`HueClusterer`] builder, its [`Clustering`]
//! result and the [`ClusterError`] error type.

mod builder;
mod error;

pub use builder::{Clustering, HueClusterer};
pub use error::ClusterError;
