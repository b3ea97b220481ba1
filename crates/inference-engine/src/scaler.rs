//! Fitted Feature Scaler

use crate::InferenceError;
use feature_engine::FeatureVector;
use serde::{Deserialize, Serialize};

/// Fitted standardization parameters, produced once at training time and
/// loaded read-only for inference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerState {
    /// Per-feature mean subtracted before scaling
    pub mean: Vec<f64>,
    /// Per-feature divisor applied after centering
    pub scale: Vec<f64>,
}

impl ScalerState {
    /// Feature dimensionality this scaler was fitted on
    pub fn expected_dim(&self) -> usize {
        self.mean.len()
    }

    /// Check fitted-state invariants
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.mean.is_empty() {
            return Err(InferenceError::InvalidArtifact(
                "scaler has zero dimensions".to_string(),
            ));
        }
        if self.mean.len() != self.scale.len() {
            return Err(InferenceError::InvalidArtifact(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(i) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(InferenceError::InvalidArtifact(format!(
                "scaler scale[{i}] is zero or non-finite"
            )));
        }
        Ok(())
    }

    /// Apply the fitted affine transform elementwise.
    ///
    /// Fails when the feature vector length disagrees with the fitted
    /// dimensionality; a mismatch means the extractor and the artifacts
    /// were not trained together and must never be coerced.
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        if features.len() != self.expected_dim() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.expected_dim(),
                actual: features.len(),
            });
        }

        let scaled = features
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(&x, (&m, &s))| (x - m) / s)
            .collect();

        Ok(scaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> ScalerState {
        ScalerState {
            mean: vec![1.0, 2.0, 3.0],
            scale: vec![2.0, 4.0, 0.5],
        }
    }

    #[test]
    fn test_transform_standardizes() {
        let features = FeatureVector {
            values: vec![3.0, 2.0, 2.0],
        };
        let scaled = scaler().transform(&features).unwrap();
        assert_eq!(scaled, vec![1.0, 0.0, -2.0]);
    }

    #[test]
    fn test_transform_rejects_wrong_length() {
        let features = FeatureVector {
            values: vec![1.0, 2.0],
        };
        let err = scaler().transform(&features).unwrap_err();
        match err {
            InferenceError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_scale() {
        let bad = ScalerState {
            mean: vec![0.0, 0.0],
            scale: vec![1.0, 0.0],
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let bad = ScalerState {
            mean: vec![0.0, 0.0],
            scale: vec![1.0],
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_fitted_state() {
        assert!(scaler().validate().is_ok());
    }
}
