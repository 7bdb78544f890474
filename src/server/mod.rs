//! # HTTP Server for the Contract Builder
//!
//! Serves the builder UI and a JSON API over the canvas model, the emitter,
//! the importer and the deployment pipeline.
//!
//! ## Usage
//!
//! ```bash
//! solcraft serve --listen 0.0.0.0:8080 --compiler-url http://localhost:9000
//! ```
//!
//! Then open http://localhost:8080 in a browser to access the builder.
//!
//! ## Routes
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET /api/library`, `GET /api/library/:id` | Component palette |
//! | `GET /api/presets`, `GET /api/presets/:name` | Starter canvases |
//! | `POST /api/emit`, `/api/parse`, `/api/check` | Stateless codegen |
//! | `/api/canvas/...` | Server-held builder session |
//! | `POST /api/pipeline/run` | Stage runner |

mod handlers;
mod state;
mod static_files;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::SolcraftError;

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Frontend
        .route("/", get(static_files::index_handler))
        .route("/assets/*path", get(static_files::asset_handler))
        // Library API
        .route("/api/library", get(handlers::library::list))
        .route("/api/library/:id", get(handlers::library::get_entry))
        .route("/api/presets", get(handlers::library::presets))
        .route("/api/presets/:name", get(handlers::library::preset))
        // Stateless codegen API
        .route("/api/emit", post(handlers::codegen::emit))
        .route("/api/parse", post(handlers::codegen::parse))
        .route("/api/check", post(handlers::codegen::check))
        // Session canvas API
        .route(
            "/api/canvas",
            get(handlers::canvas::get_canvas)
                .put(handlers::canvas::replace)
                .delete(handlers::canvas::clear),
        )
        .route("/api/canvas/components", post(handlers::canvas::add))
        .route(
            "/api/canvas/components/:id",
            patch(handlers::canvas::update).delete(handlers::canvas::remove),
        )
        .route("/api/canvas/import", post(handlers::canvas::import))
        .route("/api/canvas/source", get(handlers::canvas::source))
        // Pipeline API
        .route("/api/pipeline/run", post(handlers::pipeline::run))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use solcraft::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), solcraft::error::SolcraftError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), SolcraftError> {
    let app_state = Arc::new(AppState::new(config.clone())?);
    let app = router(app_state);

    info!(listen = %config.listen_addr, "solcraft HTTP server starting");
    match (&config.compiler_url, &config.deployer_url) {
        (None, None) => info!("no compiler or deployer configured; pipeline stages will fail"),
        (compiler, deployer) => info!(?compiler, ?deployer, "pipeline services"),
    }

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            SolcraftError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!("open http://{}/ in your browser", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| SolcraftError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
