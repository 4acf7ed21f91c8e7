//! Service tests for the dashboard
//!
//! This module contains tests for the dataset loader and static file server.

pub mod dataset_loader;
