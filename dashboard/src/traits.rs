//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use shared::RentalTable;

use crate::error::DashboardResult;

/// Rental dataset source
#[mockall::automock]
#[async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Load the complete rental table
    async fn load(&self) -> DashboardResult<RentalTable>;

    /// Human-readable description of where the data comes from
    fn source(&self) -> String;
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Serve static file
    async fn serve_file(&self, path: &str) -> DashboardResult<StaticFileResponse>;

    /// Check if file exists
    async fn file_exists(&self, path: &str) -> bool;
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    /// Create new static file response
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
