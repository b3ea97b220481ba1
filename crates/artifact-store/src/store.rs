//! Memoized Artifact Loading

use crate::{ArtifactBundle, ArtifactError, DemoDataset};
use inference_engine::DiagnosisPipeline;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Everything inference needs, loaded and validated as one unit
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    /// Fitted model, scaler and label table
    pub bundle: ArtifactBundle,
    /// Demo recordings for the sample browser
    pub demo: DemoDataset,
}

impl LoadedArtifacts {
    /// Assemble a diagnosis pipeline over these artifacts
    pub fn pipeline(&self) -> DiagnosisPipeline<'_> {
        DiagnosisPipeline::new(&self.bundle.scaler, &self.bundle.model, &self.bundle.encoder)
    }
}

/// Loads artifacts from disk exactly once and hands out shared views.
///
/// The first `load` reads and validates both files; every later call
/// returns the same `Arc`. A failed load leaves the store empty so the
/// next call retries.
pub struct ArtifactStore {
    bundle_path: PathBuf,
    demo_path: PathBuf,
    loaded: Mutex<Option<Arc<LoadedArtifacts>>>,
}

impl ArtifactStore {
    /// Create a store over the two artifact file paths. Nothing is read
    /// until the first `load`.
    pub fn new(bundle_path: impl Into<PathBuf>, demo_path: impl Into<PathBuf>) -> Self {
        Self {
            bundle_path: bundle_path.into(),
            demo_path: demo_path.into(),
            loaded: Mutex::new(None),
        }
    }

    /// Load and validate the artifacts, or return the memoized copy
    pub fn load(&self) -> Result<Arc<LoadedArtifacts>, ArtifactError> {
        let mut slot = self
            .loaded
            .lock()
            .map_err(|e| ArtifactError::Inconsistent(format!("artifact lock poisoned: {e}")))?;

        if let Some(loaded) = slot.as_ref() {
            return Ok(Arc::clone(loaded));
        }

        let bundle = ArtifactBundle::from_path(&self.bundle_path)?;
        let demo = DemoDataset::from_path(&self.demo_path)?;

        // Demo ground truth must speak the same label vocabulary as the
        // fitted encoder, otherwise predicted-vs-truth comparisons are
        // meaningless.
        for (index, sample) in demo.iter().enumerate() {
            if !bundle.encoder.contains_label(&sample.label) {
                return Err(ArtifactError::Inconsistent(format!(
                    "demo sample {index} is labeled '{}', which the label table does not contain",
                    sample.label
                )));
            }
        }

        let loaded = Arc::new(LoadedArtifacts { bundle, demo });
        info!(
            "artifacts ready: {} demo samples, labels {:?}",
            loaded.demo.len(),
            loaded
                .bundle
                .encoder
                .entries
                .iter()
                .map(|e| e.label.as_str())
                .collect::<Vec<_>>()
        );
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }
}
