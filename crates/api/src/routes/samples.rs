//! Sample Browser Routes

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// One row of the sample browser
#[derive(Debug, Serialize)]
pub struct SampleSummary {
    /// Index to pass to the diagnose endpoint
    pub index: usize,
    /// Frequency bin count
    pub bins: usize,
    /// Time step count
    pub steps: usize,
    /// Ground-truth diagnosis label
    pub label: String,
}

/// Response for the samples endpoint
#[derive(Debug, Serialize)]
pub struct SamplesResponse {
    pub data: Vec<SampleSummary>,
    pub count: usize,
}

/// List the demo samples available for diagnosis
pub async fn get_samples(State(state): State<Arc<AppState>>) -> Json<SamplesResponse> {
    let data: Vec<_> = state
        .artifacts
        .demo
        .iter()
        .enumerate()
        .map(|(index, sample)| SampleSummary {
            index,
            bins: sample.spectrogram.bins(),
            steps: sample.spectrogram.steps(),
            label: sample.label.clone(),
        })
        .collect();

    Json(SamplesResponse {
        count: data.len(),
        data,
    })
}
