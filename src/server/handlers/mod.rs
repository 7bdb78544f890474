//! HTTP handlers for the server.

use axum::http::StatusCode;

use crate::error::CanvasError;

pub mod canvas;
pub mod codegen;
pub mod library;
pub mod pipeline;

/// Map a canvas error onto a response: unknown ids are 404, the rest are
/// caller mistakes.
fn canvas_error(e: CanvasError) -> (StatusCode, String) {
    let status = match e {
        CanvasError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, e.to_string())
}
