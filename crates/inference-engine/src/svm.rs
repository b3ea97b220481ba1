//! Fitted Kernel Classifier

use crate::InferenceError;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Kernel function of the fitted SVM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kernel {
    /// RBF kernel: k(x, y) = exp(-gamma * ||x - y||^2)
    Rbf { gamma: f64 },
    /// Linear kernel: k(x, y) = x . y
    Linear,
}

impl Kernel {
    /// Evaluate the kernel for a pair of vectors
    #[inline]
    fn evaluate(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
        match self {
            Kernel::Rbf { gamma } => {
                let sq_dist: f64 = x
                    .iter()
                    .zip(y.iter())
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum();
                (-gamma * sq_dist).exp()
            }
            Kernel::Linear => x.dot(&y),
        }
    }
}

/// Outcome of one classifier evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Winning class code
    pub class_code: i32,
    /// Signed distance from the decision boundary
    pub decision_value: f64,
}

/// Fitted binary SVM in dual form.
///
/// Decision function: f(x) = sum_i dual_coefs[i] * k(x, sv[i]) + intercept.
/// A positive value selects `classes[1]`, otherwise `classes[0]`, matching
/// the convention the model was exported with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierState {
    /// Kernel function and hyperparameters
    pub kernel: Kernel,
    /// Support vectors, one per row
    pub support_vectors: Array2<f64>,
    /// Signed dual coefficients, one per support vector
    pub dual_coefs: Vec<f64>,
    /// Decision function bias
    pub intercept: f64,
    /// The two class codes, in fitted order
    pub classes: [i32; 2],
}

impl ClassifierState {
    /// Feature dimensionality this classifier was fitted on
    pub fn expected_dim(&self) -> usize {
        self.support_vectors.ncols()
    }

    /// Check fitted-state invariants
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.support_vectors.nrows() == 0 || self.support_vectors.ncols() == 0 {
            return Err(InferenceError::InvalidArtifact(
                "classifier has no support vectors".to_string(),
            ));
        }
        if self.dual_coefs.len() != self.support_vectors.nrows() {
            return Err(InferenceError::InvalidArtifact(format!(
                "classifier has {} support vectors but {} dual coefficients",
                self.support_vectors.nrows(),
                self.dual_coefs.len()
            )));
        }
        if self.classes[0] == self.classes[1] {
            return Err(InferenceError::InvalidArtifact(format!(
                "classifier class codes must be distinct, both are {}",
                self.classes[0]
            )));
        }
        if let Kernel::Rbf { gamma } = self.kernel {
            if !gamma.is_finite() || gamma <= 0.0 {
                return Err(InferenceError::InvalidArtifact(format!(
                    "rbf gamma must be finite and positive, got {gamma}"
                )));
            }
        }
        Ok(())
    }

    /// Evaluate the decision function and pick the winning class code
    pub fn predict(&self, scaled: &[f64]) -> Result<Decision, InferenceError> {
        if scaled.len() != self.expected_dim() {
            return Err(InferenceError::DimensionMismatch {
                expected: self.expected_dim(),
                actual: scaled.len(),
            });
        }

        let x = ArrayView1::from(scaled);
        let mut sum = self.intercept;
        for (row, coef) in self.support_vectors.rows().into_iter().zip(&self.dual_coefs) {
            sum += coef * self.kernel.evaluate(x, row);
        }

        let class_code = if sum > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        };

        Ok(Decision {
            class_code,
            decision_value: sum,
        })
    }
}
