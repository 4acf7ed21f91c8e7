//! Test helper utilities for dashboard integration tests

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use serde_json::Value;
use shared::{RentalTable, Year};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

use dashboard::{DashboardConfig, DashboardServer, DashboardState, RealStaticFileServer};

/// Build a router over `table` with a temp static directory holding an index page
pub fn create_test_router(table: RentalTable, default_year: Option<Year>) -> (TempDir, Router) {
    let static_dir = TempDir::new().unwrap();
    fs::write(static_dir.path().join("index.html"), "<html>dashboard index</html>").unwrap();
    fs::write(static_dir.path().join("logo.png"), [1u8, 2, 3]).unwrap();

    let config = DashboardConfig {
        static_dir: static_dir.path().to_path_buf(),
        default_year,
        ..DashboardConfig::default()
    };

    let server = DashboardServer::new(
        DashboardState::new(table, config),
        RealStaticFileServer::new(static_dir.path()),
    );

    (static_dir, server.build_router())
}

/// Issue a GET request and return status and raw body
pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Issue a GET request and parse the body as JSON
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}
