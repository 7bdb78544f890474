//! Server state and configuration.

use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use crate::canvas::Canvas;
use crate::error::SolcraftError;
use crate::pipeline::{Pipeline, PipelineConfig};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Base URL of the compilation service
    pub compiler_url: Option<String>,
    /// Base URL of the deployment service
    pub deployer_url: Option<String>,
    /// Per-request timeout for both services
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            compiler_url: None,
            deployer_url: None,
            timeout_secs: PipelineConfig::default().timeout_secs,
        }
    }
}

impl ServerConfig {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            compiler_url: self.compiler_url.clone(),
            deployer_url: self.deployer_url.clone(),
            timeout_secs: self.timeout_secs,
            ..Default::default()
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    /// The builder session's canvas.
    pub canvas: RwLock<Canvas>,
    pub pipeline: Pipeline,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, SolcraftError> {
        let pipeline = Pipeline::from_config(&config.pipeline_config())?;
        Ok(Self::with_pipeline(config, pipeline))
    }

    /// State with explicit collaborators (tests, embedding).
    pub fn with_pipeline(config: ServerConfig, pipeline: Pipeline) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            config,
            boot_time,
            canvas: RwLock::new(Canvas::new()),
            pipeline,
        }
    }
}
