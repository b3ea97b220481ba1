//! Feature Engineering Engine
//!
//! Provides statistical feature extraction for heart-sound classification.

mod features;
mod statistics;

pub use features::{feature_dimension, FeatureExtractor, FeatureVector, STATS_PER_BIN};
pub use statistics::BinStatistics;
