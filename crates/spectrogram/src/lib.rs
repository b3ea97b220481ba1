//! Spectrogram Data Types
//!
//! Shared matrix type for phonocardiogram time-frequency data.

mod matrix;

pub use matrix::{LabeledSample, Spectrogram};

use thiserror::Error;

/// Errors for malformed spectrogram input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Matrix has zero frequency bins or zero time steps
    #[error("spectrogram must be non-empty, got {bins} bins x {steps} steps")]
    Empty { bins: usize, steps: usize },

    /// Flat buffer does not match the declared shape
    #[error("buffer length {len} does not match shape {bins}x{steps}")]
    LengthMismatch {
        bins: usize,
        steps: usize,
        len: usize,
    },
}
