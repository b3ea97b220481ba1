//! Diagnosis Routes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::{AppState, ErrorResponse};
use inference_engine::Diagnosis;

/// Request body for the diagnose endpoint
#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    /// Index into the demo dataset
    pub sample_index: usize,
}

/// Response for the diagnose endpoint
#[derive(Debug, Serialize)]
pub struct DiagnoseResponse {
    pub sample_index: usize,
    pub diagnosis: Diagnosis,
    pub ground_truth: String,
    pub matches_ground_truth: bool,
}

/// Diagnose one demo sample and compare against its ground truth.
///
/// Inference failures surface as 500 with the error message; the
/// endpoint never substitutes a fallback label.
pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DiagnoseRequest>,
) -> Result<Json<DiagnoseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let sample = state.artifacts.demo.get(request.sample_index).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("no demo sample at index {}", request.sample_index),
            }),
        )
    })?;

    let diagnosis = state
        .artifacts
        .pipeline()
        .diagnose(&sample.spectrogram)
        .map_err(|e| {
            error!("inference failed for sample {}: {}", request.sample_index, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })?;

    let matches_ground_truth = diagnosis.label == sample.label;

    Ok(Json(DiagnoseResponse {
        sample_index: request.sample_index,
        diagnosis,
        ground_truth: sample.label.clone(),
        matches_ground_truth,
    }))
}
