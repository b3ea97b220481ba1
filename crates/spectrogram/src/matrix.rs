//! Spectrogram Matrix Implementation

use crate::ShapeError;

/// Time-frequency intensity matrix of a heart-sound recording.
///
/// Rows are frequency bins, columns are time steps. The matrix is
/// immutable after construction and always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    /// Row-major intensity values (bins * steps)
    values: Vec<f64>,
    /// Number of frequency bins (rows)
    bins: usize,
    /// Number of time steps (columns)
    steps: usize,
}

impl Spectrogram {
    /// Create a spectrogram from a row-major buffer and its shape
    pub fn from_flat(bins: usize, steps: usize, values: Vec<f64>) -> Result<Self, ShapeError> {
        if bins == 0 || steps == 0 {
            return Err(ShapeError::Empty { bins, steps });
        }
        if values.len() != bins * steps {
            return Err(ShapeError::LengthMismatch {
                bins,
                steps,
                len: values.len(),
            });
        }
        Ok(Self {
            values,
            bins,
            steps,
        })
    }

    /// Create a spectrogram from nested rows
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ShapeError> {
        let bins = rows.len();
        let steps = rows.first().map(|r| r.len()).unwrap_or(0);
        if bins == 0 || steps == 0 {
            return Err(ShapeError::Empty { bins, steps });
        }
        let mut values = Vec::with_capacity(bins * steps);
        for row in rows {
            if row.len() != steps {
                return Err(ShapeError::LengthMismatch {
                    bins,
                    steps,
                    len: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            values,
            bins,
            steps,
        })
    }

    /// Number of frequency bins (rows)
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Number of time steps (columns)
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// One frequency bin across the full time axis
    pub fn row(&self, bin: usize) -> &[f64] {
        let start = bin * self.steps;
        &self.values[start..start + self.steps]
    }

    /// Iterate over frequency bins in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.steps)
    }

    /// Full row-major buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// A demo spectrogram paired with its clinician-assigned ground truth
#[derive(Debug, Clone)]
pub struct LabeledSample {
    /// The raw spectrogram
    pub spectrogram: Spectrogram,
    /// Ground-truth diagnosis label
    pub label: String,
}
