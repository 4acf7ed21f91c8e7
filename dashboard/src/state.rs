//! Dashboard state shared by all request handlers
//!
//! The rental table is loaded once and never mutated afterwards, so the only
//! interior mutability here is the view counter.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use shared::{RentalTable, Year};

use crate::config::DashboardConfig;

#[derive(Debug)]
pub struct DashboardState {
    table: RentalTable,
    config: DashboardConfig,
    started_at: Instant,
    views_served: AtomicU64,
}

impl DashboardState {
    pub fn new(table: RentalTable, config: DashboardConfig) -> Self {
        Self {
            table,
            config,
            started_at: Instant::now(),
            views_served: AtomicU64::new(0),
        }
    }

    pub fn table(&self) -> &RentalTable {
        &self.table
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Years offered by the year selector
    pub fn available_years(&self) -> Vec<Year> {
        self.table.years()
    }

    /// Configured default year, else the earliest year in the data
    pub fn default_year(&self) -> Option<Year> {
        self.config
            .default_year
            .or_else(|| self.table.years().first().copied())
    }

    /// Pick the requested year or fall back to the default
    pub fn resolve_year(&self, requested: Option<Year>) -> Option<Year> {
        requested.or_else(|| self.default_year())
    }

    /// Count one rendered view, returning the new total
    pub fn record_view(&self) -> u64 {
        self.views_served.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn views_served(&self) -> u64 {
        self.views_served.load(Ordering::Relaxed)
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
