//! # Error Types
//!
//! This module defines error types used throughout the solcraft library.

use thiserror::Error;

use crate::canvas::ComponentType;

/// Main error type for solcraft operations
#[derive(Debug, Error)]
pub enum SolcraftError {
    /// Canvas construction or mutation failed
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    /// A pipeline stage or collaborator failed
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Invalid user input (unknown preset, bad flag combination)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON (de)serialization error wrapper
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building or editing canvas components.
///
/// Emission itself never fails; these are surfaced when a record is
/// constructed (deserialized, instantiated or patched).
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("unknown originalId '{0}'")]
    UnknownOriginalId(String),

    #[error("originalId '{original_id}' is a {expected} component, not a {found}")]
    TypeMismatch {
        original_id: String,
        expected: ComponentType,
        found: ComponentType,
    },

    #[error("{original_id}: invalid properties: {message}")]
    InvalidProperties {
        original_id: String,
        message: String,
    },

    #[error("properties must be a JSON object")]
    PropertiesNotAnObject,

    #[error("component id '{0}' already exists on the canvas")]
    DuplicateId(String),

    #[error("no component with id '{0}'")]
    NotFound(String),
}

/// Errors raised by pipeline stages and their external collaborators.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unknown stage '{0}'")]
    UnknownStage(String),

    #[error("source is empty")]
    EmptySource,

    #[error("stage '{stage}' requires {requirement}")]
    MissingArtifact {
        stage: &'static str,
        requirement: &'static str,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error string reported by a collaborator service.
    #[error("{service} reported: {message}")]
    Service {
        service: &'static str,
        message: String,
    },

    #[error("check failed: {0}")]
    Check(String),
}
