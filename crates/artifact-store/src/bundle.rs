//! Artifact Bundle and Demo Dataset Files

use crate::ArtifactError;
use inference_engine::{ClassifierState, LabelCodec, ScalerState};
use serde::{Deserialize, Serialize};
use spectrogram::{LabeledSample, Spectrogram};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Schema version this build reads and writes
pub const SCHEMA_VERSION: u32 = 1;

/// The three fitted artifacts exported together at training time.
///
/// The bundle is the unit of compatibility: artifacts from different
/// training runs must never be mixed, so they travel in one file and
/// are validated against each other on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Exporter schema version
    pub schema_version: u32,
    /// Fitted kernel classifier
    pub model: ClassifierState,
    /// Fitted feature scaler
    pub scaler: ScalerState,
    /// Class code to label table
    pub encoder: LabelCodec,
}

impl ArtifactBundle {
    /// Parse and validate a bundle from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let bundle: ArtifactBundle = serde_json::from_reader(reader)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Parse and validate a bundle from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let bundle = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded artifact bundle from {}: {} support vectors, {} features, {} labels",
            path.display(),
            bundle.model.support_vectors.nrows(),
            bundle.scaler.expected_dim(),
            bundle.encoder.entries.len()
        );
        Ok(bundle)
    }

    /// Check each artifact and their mutual consistency.
    ///
    /// Per-artifact checks come first so the error names the broken
    /// piece; cross-checks then catch bundles stitched together from
    /// different training runs.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::UnsupportedSchemaVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        self.scaler.validate()?;
        self.model.validate()?;
        self.encoder.validate()?;

        if self.scaler.expected_dim() != self.model.expected_dim() {
            return Err(ArtifactError::Inconsistent(format!(
                "scaler expects {} features but classifier expects {}",
                self.scaler.expected_dim(),
                self.model.expected_dim()
            )));
        }
        for code in self.model.classes {
            if !self.encoder.contains_code(code) {
                return Err(ArtifactError::Inconsistent(format!(
                    "classifier emits class code {code} but the label table does not contain it"
                )));
            }
        }

        Ok(())
    }
}

/// One stored demo sample: a flattened spectrogram plus its ground truth
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSampleRecord {
    /// Frequency bin count
    pub bins: usize,
    /// Time step count
    pub steps: usize,
    /// Row-major cell values, length bins * steps
    pub values: Vec<f64>,
    /// Ground-truth diagnosis label
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct DemoFile {
    schema_version: u32,
    samples: Vec<DemoSampleRecord>,
}

/// Demo recordings with ground-truth labels, used by the sample browser
#[derive(Debug, Clone)]
pub struct DemoDataset {
    samples: Vec<LabeledSample>,
}

impl DemoDataset {
    /// Parse a demo dataset from a reader, rebuilding each spectrogram
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let file: DemoFile = serde_json::from_reader(reader)?;
        if file.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::UnsupportedSchemaVersion {
                found: file.schema_version,
                expected: SCHEMA_VERSION,
            });
        }

        let mut samples = Vec::with_capacity(file.samples.len());
        for record in file.samples {
            let spectrogram = Spectrogram::from_flat(record.bins, record.steps, record.values)?;
            samples.push(LabeledSample {
                spectrogram,
                label: record.label,
            });
        }

        Ok(Self { samples })
    }

    /// Parse a demo dataset from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded demo dataset from {}: {} samples",
            path.display(),
            dataset.len()
        );
        Ok(dataset)
    }

    /// Number of stored samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at a browser index, if in range
    pub fn get(&self, index: usize) -> Option<&LabeledSample> {
        self.samples.get(index)
    }

    /// Iterate over all samples in stored order
    pub fn iter(&self) -> impl Iterator<Item = &LabeledSample> {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inference_engine::{Kernel, LabelEntry};
    use ndarray::array;

    fn bundle() -> ArtifactBundle {
        ArtifactBundle {
            schema_version: SCHEMA_VERSION,
            model: ClassifierState {
                kernel: Kernel::Rbf { gamma: 0.1 },
                support_vectors: array![[1.0, 0.0], [-1.0, 0.0]],
                dual_coefs: vec![1.0, -1.0],
                intercept: 0.0,
                classes: [0, 1],
            },
            scaler: ScalerState {
                mean: vec![0.0, 0.0],
                scale: vec![1.0, 1.0],
            },
            encoder: LabelCodec {
                entries: vec![
                    LabelEntry {
                        code: 0,
                        label: "Abnormal".to_string(),
                    },
                    LabelEntry {
                        code: 1,
                        label: "Normal".to_string(),
                    },
                ],
            },
        }
    }

    #[test]
    fn test_bundle_round_trips_through_json() {
        let original = bundle();
        let json = serde_json::to_string(&original).unwrap();
        let loaded = ArtifactBundle::from_reader(json.as_bytes()).unwrap();
        assert_eq!(loaded.scaler.expected_dim(), 2);
        assert_eq!(loaded.encoder.entries, original.encoder.entries);
    }

    #[test]
    fn test_bundle_rejects_wrong_schema_version() {
        let mut b = bundle();
        b.schema_version = 2;
        let json = serde_json::to_string(&b).unwrap();
        let err = ArtifactBundle::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::UnsupportedSchemaVersion {
                found: 2,
                expected: 1
            }
        ));
    }

    #[test]
    fn test_bundle_rejects_dim_mismatch() {
        let mut b = bundle();
        b.scaler = ScalerState {
            mean: vec![0.0; 3],
            scale: vec![1.0; 3],
        };
        let err = b.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::Inconsistent(_)));
    }

    #[test]
    fn test_bundle_rejects_uncovered_class_code() {
        let mut b = bundle();
        b.encoder = LabelCodec {
            entries: vec![LabelEntry {
                code: 7,
                label: "Normal".to_string(),
            }],
        };
        let err = b.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::Inconsistent(_)));
    }

    #[test]
    fn test_bundle_surfaces_broken_artifact() {
        let mut b = bundle();
        b.scaler.scale[0] = 0.0;
        let err = b.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::Artifact(_)));
    }

    #[test]
    fn test_bundle_rejects_malformed_json() {
        let err = ArtifactBundle::from_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::Parse(_)));
    }

    #[test]
    fn test_demo_dataset_rebuilds_spectrograms() {
        let json = r#"{
            "schema_version": 1,
            "samples": [
                {"bins": 2, "steps": 3, "values": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0], "label": "Normal"},
                {"bins": 1, "steps": 2, "values": [0.5, 0.5], "label": "Abnormal"}
            ]
        }"#;
        let dataset = DemoDataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        let first = dataset.get(0).unwrap();
        assert_eq!(first.spectrogram.bins(), 2);
        assert_eq!(first.spectrogram.steps(), 3);
        assert_eq!(first.label, "Normal");
        assert!(dataset.get(2).is_none());
    }

    #[test]
    fn test_demo_dataset_rejects_bad_shape() {
        let json = r#"{
            "schema_version": 1,
            "samples": [
                {"bins": 2, "steps": 3, "values": [1.0, 2.0], "label": "Normal"}
            ]
        }"#;
        let err = DemoDataset::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::Shape(_)));
    }

    #[test]
    fn test_demo_dataset_rejects_wrong_schema_version() {
        let json = r#"{"schema_version": 9, "samples": []}"#;
        let err = DemoDataset::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ArtifactError::UnsupportedSchemaVersion { found: 9, .. }
        ));
    }
}
