//! Shared types for the bike sharing dashboard
//!
//! Holds the rental data model, dataset parsing, error types and logging
//! helpers used by the dashboard crate.

pub mod dataset;
pub mod errors;
pub mod logging;
pub mod types;

pub use dataset::{parse_rentals, parse_rentals_str, REQUIRED_COLUMNS};
pub use errors::*;
pub use types::*;
