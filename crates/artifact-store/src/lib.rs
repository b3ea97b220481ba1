//! Artifact Store
//!
//! Loads the fitted model bundle and the demo dataset from disk,
//! validates them as a unit, and hands out a shared read-only view.

mod bundle;
mod store;

pub use bundle::{ArtifactBundle, DemoDataset, DemoSampleRecord, SCHEMA_VERSION};
pub use store::{ArtifactStore, LoadedArtifacts};

use inference_engine::InferenceError;
use spectrogram::ShapeError;
use thiserror::Error;

/// Errors while loading or validating artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Artifact file could not be read
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),

    /// Artifact file is not valid JSON for the expected schema
    #[error("artifact parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact was produced by an incompatible exporter
    #[error("unsupported schema version {found}, this build expects {expected}")]
    UnsupportedSchemaVersion { found: u32, expected: u32 },

    /// A fitted artifact failed its own validation
    #[error(transparent)]
    Artifact(#[from] InferenceError),

    /// A demo sample carries an impossible shape
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Artifacts are individually well-formed but inconsistent together
    #[error("inconsistent artifacts: {0}")]
    Inconsistent(String),
}
