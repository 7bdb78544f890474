//! Stateless emit / parse / check handlers.
//!
//! These take the whole component list in the request body, so a client
//! that keeps its own canvas never needs the session endpoints.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, CanvasComponent, EmitOptions};
use crate::parser::{self, ParseOutcome};
use crate::validate::{self, Diagnostic};

use super::canvas_error;

#[derive(Debug, Deserialize)]
pub struct EmitRequest {
    #[serde(default)]
    pub components: Vec<CanvasComponent>,
    #[serde(default)]
    pub options: EmitOptions,
}

#[derive(Debug, Serialize)]
pub struct EmitResponse {
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Handle POST /api/emit - generate Solidity for a component list.
pub async fn emit(Json(req): Json<EmitRequest>) -> Result<Json<EmitResponse>, (StatusCode, String)> {
    let canvas = Canvas::from_components(req.components).map_err(canvas_error)?;
    let source = canvas.emit_with(&req.options);
    let diagnostics = validate::check(canvas.components());
    Ok(Json(EmitResponse {
        source,
        diagnostics,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub source: String,
}

/// Handle POST /api/parse - recognise components in pasted Solidity.
pub async fn parse(Json(req): Json<ParseRequest>) -> Json<ParseOutcome> {
    Json(parser::parse(&req.source))
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub components: Vec<CanvasComponent>,
}

/// Handle POST /api/check - diagnostics only.
pub async fn check(Json(req): Json<CheckRequest>) -> Json<Vec<Diagnostic>> {
    Json(validate::check(&req.components))
}
