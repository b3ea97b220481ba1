//! Class Code to Label Mapping

use crate::InferenceError;
use serde::{Deserialize, Serialize};

/// One row of the code-to-label table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Integer class code emitted by the classifier
    pub code: i32,
    /// Human-readable diagnosis label
    pub label: String,
}

/// Bijective mapping between classifier class codes and diagnosis labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCodec {
    /// Table entries, fitted order preserved
    pub entries: Vec<LabelEntry>,
}

impl LabelCodec {
    /// Check that the table is a non-empty bijection
    pub fn validate(&self) -> Result<(), InferenceError> {
        if self.entries.is_empty() {
            return Err(InferenceError::InvalidArtifact(
                "label table is empty".to_string(),
            ));
        }
        for (i, entry) in self.entries.iter().enumerate() {
            for other in &self.entries[i + 1..] {
                if entry.code == other.code {
                    return Err(InferenceError::InvalidArtifact(format!(
                        "label table repeats class code {}",
                        entry.code
                    )));
                }
                if entry.label == other.label {
                    return Err(InferenceError::InvalidArtifact(format!(
                        "label table repeats label '{}'",
                        entry.label
                    )));
                }
            }
        }
        Ok(())
    }

    /// Translate a class code into its label.
    ///
    /// An unknown code means the classifier and the encoder were not
    /// fitted together; the caller must treat this as fatal.
    pub fn decode(&self, code: i32) -> Result<&str, InferenceError> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.label.as_str())
            .ok_or(InferenceError::UnknownClassCode(code))
    }

    /// Whether a class code is present in the table
    pub fn contains_code(&self, code: i32) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Whether a label is present in the table
    pub fn contains_label(&self, label: &str) -> bool {
        self.entries.iter().any(|e| e.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> LabelCodec {
        LabelCodec {
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
        }
    }

    #[test]
    fn test_decode_known_codes() {
        let codec = codec();
        assert_eq!(codec.decode(0).unwrap(), "Abnormal");
        assert_eq!(codec.decode(1).unwrap(), "Normal");
    }

    #[test]
    fn test_decode_unknown_code() {
        let err = codec().decode(2).unwrap_err();
        assert!(matches!(err, InferenceError::UnknownClassCode(2)));
    }

    #[test]
    fn test_validate_rejects_duplicate_code() {
        let bad = LabelCodec {
            entries: vec![
                LabelEntry {
                    code: 0,
                    label: "Abnormal".to_string(),
                },
                LabelEntry {
                    code: 0,
                    label: "Normal".to_string(),
                },
            ],
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_label() {
        let bad = LabelCodec {
            entries: vec![
                LabelEntry {
                    code: 0,
                    label: "Normal".to_string(),
                },
                LabelEntry {
                    code: 1,
                    label: "Normal".to_string(),
                },
            ],
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let bad = LabelCodec { entries: vec![] };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_contains_helpers() {
        let codec = codec();
        assert!(codec.contains_code(1));
        assert!(!codec.contains_code(5));
        assert!(codec.contains_label("Normal"));
        assert!(!codec.contains_label("Murmur"));
    }
}
