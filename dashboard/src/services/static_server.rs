//! Static file serving service
//!
//! Serves the dashboard page and its assets with content types and caching

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{Component, component_debug, component_warn};

use crate::error::{DashboardError, DashboardResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

const INDEX_FILE: &str = "index.html";

/// Real static file server implementation
#[derive(Clone, Debug)]
pub struct RealStaticFileServer {
    /// Base directory for static files
    base_dir: PathBuf,
}

impl RealStaticFileServer {
    /// Create new static file server
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// MIME type from file extension
    pub fn mime_type(path: &str) -> &'static str {
        match extension(path).as_deref() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("csv") => "text/csv",
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => "application/octet-stream",
        }
    }

    /// Cache control header based on file type
    pub fn cache_control(path: &str) -> Option<&'static str> {
        match extension(path).as_deref() {
            Some("html") => Some("no-cache"),
            Some("js") | Some("css") => Some("public, max-age=3600"),
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("svg") | Some("ico") => {
                Some("public, max-age=86400")
            }
            Some("woff") | Some("woff2") => Some("public, max-age=604800"),
            _ => None,
        }
    }

    /// Resolve file path and prevent directory traversal
    fn resolve_path(&self, request_path: &str) -> DashboardResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        let file_path = if clean_path.is_empty() { INDEX_FILE } else { clean_path };

        let canonical_path = self
            .base_dir
            .join(file_path)
            .canonicalize()
            .map_err(|_| DashboardError::not_found(request_path))?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            component_warn!(Component::Server, "Static directory {:?} not accessible: {}", self.base_dir, e);
            DashboardError::internal("Static file base directory not accessible")
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            return Err(DashboardError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> DashboardResult<StaticFileResponse> {
        let mut file_path = self.resolve_path(path)?;

        if file_path.is_dir() {
            file_path = file_path.join(INDEX_FILE);
            if !file_path.is_file() {
                return Err(DashboardError::not_found(path));
            }
        }

        let content = fs::read(&file_path).await.map_err(|e| {
            component_warn!(Component::Server, "❌ Failed to read static file {}: {}", path, e);
            DashboardError::not_found(path)
        })?;

        component_debug!(Component::Server, "📄 Served static file: {} ({} bytes)", path, content.len());

        // Headers follow the file actually read, not the request path
        let served_name = file_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        let mut response = StaticFileResponse::new(content, Self::mime_type(served_name).to_string());
        if let Some(cache) = Self::cache_control(served_name) {
            response = response.with_cache_control(cache.to_string());
        }

        Ok(response)
    }

    async fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).map(|p| p.is_file()).unwrap_or(false)
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
