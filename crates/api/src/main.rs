//! Heart Sound Diagnosis Pipeline - Main Entry Point

use api::{init_logging, run_server};
use artifact_store::ArtifactStore;
use tracing::info;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    info!("=== Heart Sound Diagnosis Pipeline v{} ===", env!("CARGO_PKG_VERSION"));

    let bundle_path = env_or("PCG_ARTIFACT_PATH", "artifacts/model_bundle.json");
    let demo_path = env_or("PCG_DEMO_DATA_PATH", "artifacts/demo_dataset.json");
    let addr = env_or("PCG_API_ADDR", "0.0.0.0:8080");

    let store = ArtifactStore::new(bundle_path, demo_path);
    let artifacts = store.load()?;

    run_server(&addr, artifacts).await?;

    Ok(())
}
