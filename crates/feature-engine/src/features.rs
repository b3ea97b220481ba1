//! Feature Vector Assembly

use crate::statistics::BinStatistics;
use serde::{Deserialize, Serialize};
use spectrogram::Spectrogram;
use tracing::debug;

/// Number of statistics emitted per frequency bin
pub const STATS_PER_BIN: usize = 4;

/// Feature vector length for a spectrogram with the given bin count
pub fn feature_dimension(bins: usize) -> usize {
    STATS_PER_BIN * bins
}

/// Fixed-order feature vector for ML inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values in block order [mean.., std.., max.., min..]
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Number of features
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw feature slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Feature extractor that reduces spectrograms to statistical summaries
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Extract the fixed-order feature vector from a spectrogram.
    ///
    /// Each frequency bin is reduced across the time axis to mean,
    /// population standard deviation, max, and min. The output
    /// concatenates the four per-bin vectors block-wise; the block order
    /// matches the layout the scaler and classifier were fitted against
    /// and must never change.
    pub fn extract(spectrogram: &Spectrogram) -> FeatureVector {
        let bins = spectrogram.bins();
        let mut values = vec![0.0; feature_dimension(bins)];

        for (bin, row) in spectrogram.rows().enumerate() {
            let stats = BinStatistics::compute(row);
            values[bin] = stats.mean;
            values[bins + bin] = stats.std_dev;
            values[2 * bins + bin] = stats.max;
            values[3 * bins + bin] = stats.min;
        }

        debug!(
            "extracted {} features from {}x{} spectrogram",
            values.len(),
            bins,
            spectrogram.steps()
        );

        FeatureVector { values }
    }
}
