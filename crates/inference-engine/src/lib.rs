//! SVM Inference Engine
//!
//! Provides the fitted-artifact types and the diagnosis pipeline that
//! turns a spectrogram into a human-readable label.

mod encoder;
mod pipeline;
mod scaler;
mod svm;

pub use encoder::{LabelCodec, LabelEntry};
pub use pipeline::{Diagnosis, DiagnosisPipeline};
pub use scaler::ScalerState;
pub use svm::{ClassifierState, Decision, Kernel};

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Input length disagrees with a fitted artifact's dimensionality
    #[error("input has {actual} features, fitted artifact expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Classifier emitted a code the label table does not contain
    #[error("class code {0} is not present in the label table")]
    UnknownClassCode(i32),

    /// A fitted artifact violates its own invariants
    #[error("invalid fitted artifact: {0}")]
    InvalidArtifact(String),
}
