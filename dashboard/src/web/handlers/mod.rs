//! Axum request handlers

pub mod api;
pub mod static_files;
