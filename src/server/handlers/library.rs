//! Component palette and preset handlers.

use axum::{Json, extract::Path, http::StatusCode};
use serde::Serialize;

use crate::canvas::{self, Canvas, LibraryEntry};
use crate::presets;

/// Handle GET /api/library - the full palette.
pub async fn list() -> Json<Vec<LibraryEntry>> {
    Json(canvas::component_library())
}

/// Handle GET /api/library/:id - one palette entry by `originalId`.
pub async fn get_entry(Path(id): Path<String>) -> Result<Json<LibraryEntry>, (StatusCode, String)> {
    canvas::component_library()
        .into_iter()
        .find(|entry| entry.original_id == id)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown component '{}'", id)))
}

#[derive(Debug, Serialize)]
pub struct PresetSummary {
    pub name: &'static str,
    pub description: &'static str,
}

/// Handle GET /api/presets - preset names and descriptions.
pub async fn presets() -> Json<Vec<PresetSummary>> {
    let summaries = presets::list_presets()
        .iter()
        .map(|&name| PresetSummary {
            name,
            description: presets::describe(name).unwrap_or_default(),
        })
        .collect();
    Json(summaries)
}

/// Handle GET /api/presets/:name - a preset canvas.
pub async fn preset(Path(name): Path<String>) -> Result<Json<Canvas>, (StatusCode, String)> {
    presets::by_name(&name)
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown preset '{}'", name)))
}
