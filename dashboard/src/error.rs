//! Dashboard-specific error types

use thiserror::Error;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error("Dataset error: {0}")]
    Dataset(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DashboardError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found(path: impl Into<String>) -> Self {
        Self::StaticFileNotFound { path: path.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
