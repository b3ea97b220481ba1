//! Heart Sound Diagnosis API Server
//!
//! REST API server for the heart sound diagnosis dashboard.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod routes;

use artifact_store::LoadedArtifacts;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded and validated artifacts
    pub artifacts: Arc<LoadedArtifacts>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state over loaded artifacts
    pub fn new(artifacts: Arc<LoadedArtifacts>) -> Self {
        Self {
            artifacts,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
    pub metrics: SystemMetrics,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub artifacts: ComponentHealth,
    pub inference: ComponentHealth,
}

/// Individual component health
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

/// System metrics
#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    pub demo_sample_count: usize,
    pub label_count: usize,
    pub support_vector_count: usize,
}

/// Error body returned by failing handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/samples", get(routes::samples::get_samples))
        .route("/api/v1/diagnose", post(routes::diagnose::diagnose))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            artifacts: ComponentHealth {
                status: "ok".to_string(),
            },
            inference: ComponentHealth {
                status: "ok".to_string(),
            },
        },
        metrics: SystemMetrics {
            demo_sample_count: state.artifacts.demo.len(),
            label_count: state.artifacts.bundle.encoder.entries.len(),
            support_vector_count: state.artifacts.bundle.model.support_vectors.nrows(),
        },
    };

    Json(response)
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(
    addr: &str,
    artifacts: Arc<LoadedArtifacts>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(artifacts));
    let app = create_router(state);

    info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
