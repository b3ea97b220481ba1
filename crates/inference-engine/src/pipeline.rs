//! Diagnosis Pipeline

use crate::{ClassifierState, InferenceError, LabelCodec, ScalerState};
use feature_engine::FeatureExtractor;
use serde::{Deserialize, Serialize};
use spectrogram::Spectrogram;
use tracing::debug;

/// Result of one diagnosis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Predicted diagnosis label
    pub label: String,
    /// Raw class code emitted by the classifier
    pub class_code: i32,
    /// Signed distance from the decision boundary
    pub decision_value: f64,
}

/// Stateless composition of the fitted artifacts.
///
/// Borrows the artifacts read-only; concurrent diagnoses over the same
/// artifacts need no locking.
pub struct DiagnosisPipeline<'a> {
    scaler: &'a ScalerState,
    classifier: &'a ClassifierState,
    codec: &'a LabelCodec,
}

impl<'a> DiagnosisPipeline<'a> {
    /// Assemble a pipeline over loaded artifacts
    pub fn new(
        scaler: &'a ScalerState,
        classifier: &'a ClassifierState,
        codec: &'a LabelCodec,
    ) -> Self {
        Self {
            scaler,
            classifier,
            codec,
        }
    }

    /// Run extract -> transform -> predict -> decode.
    ///
    /// Each step depends on the previous one succeeding; any failure
    /// aborts the call. No fallback label is ever produced.
    pub fn diagnose(&self, spectrogram: &Spectrogram) -> Result<Diagnosis, InferenceError> {
        let features = FeatureExtractor::extract(spectrogram);
        let scaled = self.scaler.transform(&features)?;
        let decision = self.classifier.predict(&scaled)?;
        let label = self.codec.decode(decision.class_code)?;

        debug!(
            "diagnosis: label={}, code={}, decision={:.4}",
            label, decision.class_code, decision.decision_value
        );

        Ok(Diagnosis {
            label: label.to_string(),
            class_code: decision.class_code,
            decision_value: decision.decision_value,
        })
    }
}
