//! Session canvas handlers.
//!
//! The server holds one canvas per process. Every mutation takes the write
//! lock for its whole duration.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use crate::canvas::{Canvas, CanvasComponent, EmitOptions};
use crate::parser::ParseOutcome;

use super::super::state::AppState;
use super::canvas_error;

/// Handle GET /api/canvas.
pub async fn get_canvas(State(state): State<Arc<AppState>>) -> Json<Canvas> {
    Json(state.canvas.read().await.clone())
}

/// Handle PUT /api/canvas - load a saved canvas.
pub async fn replace(
    State(state): State<Arc<AppState>>,
    Json(canvas): Json<Canvas>,
) -> Json<Canvas> {
    info!(components = canvas.len(), "canvas replaced");
    let mut current = state.canvas.write().await;
    *current = canvas;
    Json(current.clone())
}

/// Handle DELETE /api/canvas.
pub async fn clear(State(state): State<Arc<AppState>>) -> StatusCode {
    state.canvas.write().await.clear();
    StatusCode::NO_CONTENT
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRequest {
    pub original_id: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Handle POST /api/canvas/components - drop a palette entry onto the canvas.
pub async fn add(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddRequest>,
) -> Result<(StatusCode, Json<CanvasComponent>), (StatusCode, String)> {
    let mut canvas = state.canvas.write().await;
    let component = canvas
        .instantiate(&req.original_id, req.x, req.y)
        .map_err(canvas_error)?;
    Ok((StatusCode::CREATED, Json(component.clone())))
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub properties: Option<Value>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// Handle PATCH /api/canvas/components/:id - merge properties and/or move.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<CanvasComponent>, (StatusCode, String)> {
    let mut canvas = state.canvas.write().await;
    let current = canvas
        .get(&id)
        .map(|c| (c.x, c.y))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no component with id '{}'", id)))?;

    if let Some(patch) = &req.properties {
        canvas.update_properties(&id, patch).map_err(canvas_error)?;
    }
    if req.x.is_some() || req.y.is_some() {
        let x = req.x.unwrap_or(current.0);
        let y = req.y.unwrap_or(current.1);
        canvas.move_to(&id, x, y).map_err(canvas_error)?;
    }

    canvas
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no component with id '{}'", id)))
}

/// Handle DELETE /api/canvas/components/:id.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    match state.canvas.write().await.remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err((StatusCode::NOT_FOUND, format!("no component with id '{}'", id))),
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
    pub source: String,
}

/// Handle POST /api/canvas/import - replace the canvas from pasted Solidity.
pub async fn import(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportRequest>,
) -> Json<ParseOutcome> {
    let outcome = state.canvas.write().await.import_solidity(&req.source);
    info!(
        recognised = outcome.components.len(),
        skipped = outcome.skipped,
        "canvas imported from source"
    );
    Json(outcome)
}

/// Handle GET /api/canvas/source - the session canvas as Solidity.
pub async fn source(
    State(state): State<Arc<AppState>>,
    Query(options): Query<EmitOptions>,
) -> impl IntoResponse {
    let source = state.canvas.read().await.emit_with(&options);
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], source)
}
