//! Per-Bin Statistical Reductions

/// Statistical summary of one frequency bin across the time axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BinStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divisor N)
    pub std_dev: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

impl BinStatistics {
    /// Compute the four reductions over a slice of values.
    ///
    /// The standard deviation uses the population divisor N, matching the
    /// convention the classifier was fitted with.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        // Mean
        let mean = values.iter().sum::<f64>() / n;

        // Min/Max
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        // Second central moment
        let mut m2 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
        }

        let variance = m2 / n;
        let std_dev = variance.sqrt();

        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }
}
