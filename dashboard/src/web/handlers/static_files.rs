//! Static file serving handlers
//!
//! Serve frontend assets with proper caching and content types

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::error::DashboardError;
use crate::traits::{StaticFileResponse, StaticFileServer};

const INDEX_FILE: &str = "index.html";

/// Page served when the static directory has no index.html
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Bike Sharing Dashboard</title>
</head>
<body>
    <h1>Bike Sharing Dashboard</h1>
    <p>No frontend assets found. The data API is available at
       <a href="/api/dashboard">/api/dashboard</a>.</p>
</body>
</html>"#;

fn file_response(file: StaticFileResponse) -> Result<Response, StatusCode> {
    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file.content_type);

    if let Some(cache_control) = file.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }

    response
        .body(file.content.into())
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serve index.html for root path
pub async fn serve_index<S>(State(static_server): State<Arc<S>>) -> Result<Response, StatusCode>
where
    S: StaticFileServer,
{
    if !static_server.file_exists(INDEX_FILE).await {
        return Ok(Html(FALLBACK_INDEX).into_response());
    }

    match static_server.serve_file(INDEX_FILE).await {
        Ok(file) => file_response(file),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Serve static files
pub async fn serve_static<S>(
    Path(path): Path<String>,
    State(static_server): State<Arc<S>>,
) -> Result<Response, StatusCode>
where
    S: StaticFileServer,
{
    match static_server.serve_file(&path).await {
        Ok(file) => file_response(file),
        Err(DashboardError::AccessDenied { .. }) => Err(StatusCode::FORBIDDEN),
        Err(DashboardError::StaticFileNotFound { .. }) => Err(StatusCode::NOT_FOUND),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
