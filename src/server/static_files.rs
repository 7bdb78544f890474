//! The builder UI, compiled into the binary.
//!
//! `frontend/dist` holds a single page plus its `assets/`. The page gets
//! the component palette inlined at serve time, so the first render needs
//! no `/api/library` round-trip. Asset URLs carry the boot time as a
//! version so they can be cached indefinitely.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use include_dir::{Dir, include_dir};
use std::sync::Arc;

use crate::canvas;

use super::state::AppState;

/// `frontend/dist`, embedded at build time (see `build.rs`).
static FRONTEND_DIST: Dir = include_dir!("$CARGO_MANIFEST_DIR/frontend/dist");

/// Handle GET / - the builder page.
///
/// Rewrites `.js"` / `.css"` references to `?v=<boot_time>` and defines
/// `window.__COMPONENT_LIBRARY` (the [`canvas::component_library`] JSON)
/// ahead of `</head>`.
pub async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match FRONTEND_DIST.get_file("index.html") {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.contents());
            let cache_bust = format!("?v={}", state.boot_time);
            let busted = contents
                .replace(".js\"", &format!(".js{}\"", cache_bust))
                .replace(".css\"", &format!(".css{}\"", cache_bust));

            let library_json = serde_json::to_string(&canvas::component_library())
                .unwrap_or_else(|_| "[]".to_string());
            let script = format!(
                "<script>window.__COMPONENT_LIBRARY={}</script></head>",
                library_json
            );
            let busted = busted.replace("</head>", &script);

            Html(busted).into_response()
        }
        None => (StatusCode::NOT_FOUND, "builder page missing from frontend/dist").into_response(),
    }
}

/// Handle GET /assets/*path - scripts and styles for the builder page.
///
/// Served with a one-year `Cache-Control`; the version query added by
/// [`index_handler`] changes on every restart.
pub async fn asset_handler(Path(path): Path<String>) -> impl IntoResponse {
    let clean_path = path.split('?').next().unwrap_or(&path);
    let file_path = format!("assets/{}", clean_path);

    match FRONTEND_DIST.get_file(&file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(clean_path)
                .first_or_octet_stream()
                .to_string();
            (
                [
                    (header::CONTENT_TYPE, mime),
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                file.contents().to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, format!("no asset '{}'", clean_path)).into_response(),
    }
}
