//! Pipeline handler.

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use crate::pipeline::{PipelineConfig, PipelineInput, PipelineReport, Stage};

use super::super::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    /// Defaults to the session canvas.
    #[serde(default)]
    pub input: Option<PipelineInput>,
    /// Defaults to every stage.
    #[serde(default)]
    pub stages: Option<Vec<Stage>>,
    #[serde(default)]
    pub contract_name: Option<String>,
}

/// Handle POST /api/pipeline/run.
///
/// Stage failures are reported in the body, not as HTTP errors.
pub async fn run(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RunRequest>,
) -> Json<PipelineReport> {
    let input = match req.input {
        Some(input) => input,
        None => PipelineInput::Canvas(state.canvas.read().await.clone()),
    };
    let stages = req.stages.unwrap_or_else(|| Stage::ALL.to_vec());
    let contract_name = req
        .contract_name
        .unwrap_or_else(|| PipelineConfig::default().contract_name);

    let report = state.pipeline.run(input, &stages, &contract_name).await;
    Json(report)
}
