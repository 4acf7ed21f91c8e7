//! Bike sharing dashboard library
//!
//! Loads a rental dataset once, aggregates it by month, hour, time of day and
//! temperature, and serves the results to a browser dashboard.

pub mod config;
pub mod core;
pub mod dashboard_impl;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use config::DashboardConfig;
pub use dashboard_impl::DashboardServer;
pub use error::{DashboardError, DashboardResult};
pub use state::DashboardState;

// Re-export trait definitions
pub use traits::{DatasetLoader, StaticFileResponse, StaticFileServer};

// Re-export service implementations
pub use services::{RealDatasetLoader, RealStaticFileServer};
