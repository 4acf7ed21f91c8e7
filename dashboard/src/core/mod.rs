//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod aggregation;
pub mod summary;

// Re-export commonly used types
pub use aggregation::{
    ClassifiedRecord, GroupTotal, HourOfDay, MonthTotal, TemperatureBucket, TimeBucket, classify,
    hourly_totals, monthly_totals, temperature_bucket_totals, time_bucket_totals,
};
pub use summary::{DashboardView, HourlyHighlights, Metric, MonthlyHighlights};
