//! Dashboard view composition
//!
//! Combines the four aggregations with the headline metrics shown above each
//! chart (highest/lowest month, busiest and quietest hours, leading buckets).

use serde::Serialize;
use shared::{RentalTable, Year};
use std::fmt::Display;

use crate::core::aggregation::{
    self, GroupTotal, HourOfDay, MonthTotal, TemperatureBucket, TimeBucket,
};

/// Number of hours listed in the busiest/quietest charts
pub const HOUR_RANKING_SIZE: usize = 5;

/// A headline metric such as `"8362 (Jan)"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub total: u64,
    /// Pre-formatted `"<total> (<label>)"`
    pub display: String,
}

impl Metric {
    pub fn new(label: impl Into<String>, total: u64) -> Self {
        let label = label.into();
        let display = format!("{total} ({label})");
        Self { label, total, display }
    }

    fn from_group<K: Display>(group: &GroupTotal<K>) -> Self {
        Self::new(group.key.to_string(), group.total)
    }
}

/// Highest and lowest month of the selected year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyHighlights {
    pub highest: Option<Metric>,
    pub lowest: Option<Metric>,
}

impl MonthlyHighlights {
    /// Only months with at least one row are ranked. Ties go to the earlier month.
    pub fn from_months(months: &[MonthTotal]) -> Self {
        let observed = || months.iter().filter(|m| m.records > 0);

        let highest = observed().fold(None::<&MonthTotal>, |best, m| match best {
            Some(b) if b.total >= m.total => Some(b),
            _ => Some(m),
        });
        let lowest = observed().fold(None::<&MonthTotal>, |best, m| match best {
            Some(b) if b.total <= m.total => Some(b),
            _ => Some(m),
        });

        let to_metric = |m: &MonthTotal| Metric::new(m.month.abbreviation(), m.total);

        Self {
            highest: highest.map(to_metric),
            lowest: lowest.map(to_metric),
        }
    }
}

/// Busiest and quietest hours
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyHighlights {
    pub highest: Option<Metric>,
    pub lowest: Option<Metric>,
    /// Busiest hours, highest first
    pub busiest: Vec<GroupTotal<HourOfDay>>,
    /// Quietest hours, lowest first
    pub quietest: Vec<GroupTotal<HourOfDay>>,
}

impl HourlyHighlights {
    /// Expects `hourly` ranked highest first, as returned by [`aggregation::hourly_totals`]
    pub fn from_ranking(hourly: &[GroupTotal<HourOfDay>]) -> Self {
        let busiest: Vec<_> = hourly.iter().take(HOUR_RANKING_SIZE).copied().collect();

        let mut ascending = hourly.to_vec();
        ascending.sort_by(|a, b| a.total.cmp(&b.total));
        ascending.truncate(HOUR_RANKING_SIZE);

        Self {
            highest: busiest.first().map(Metric::from_group),
            lowest: ascending.first().map(Metric::from_group),
            busiest,
            quietest: ascending,
        }
    }
}

/// Everything the dashboard page renders for one year selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub year: Year,
    pub available_years: Vec<Year>,
    pub year_total: u64,
    pub monthly: Vec<MonthTotal>,
    pub monthly_highlights: MonthlyHighlights,
    pub hourly: Vec<GroupTotal<HourOfDay>>,
    pub hourly_highlights: HourlyHighlights,
    pub time_buckets: Vec<GroupTotal<TimeBucket>>,
    pub temperature_buckets: Vec<GroupTotal<TemperatureBucket>>,
    pub top_time_bucket: Option<Metric>,
    pub top_temperature_bucket: Option<Metric>,
}

impl DashboardView {
    pub fn build(table: &RentalTable, year: Year) -> Self {
        let monthly = aggregation::monthly_totals(table, year);
        let hourly = aggregation::hourly_totals(table);
        let time_buckets = aggregation::time_bucket_totals(table);
        let temperature_buckets = aggregation::temperature_bucket_totals(table);

        Self {
            year,
            available_years: table.years(),
            year_total: monthly.iter().map(|m| m.total).sum(),
            monthly_highlights: MonthlyHighlights::from_months(&monthly),
            monthly,
            hourly_highlights: HourlyHighlights::from_ranking(&hourly),
            hourly,
            top_time_bucket: time_buckets.first().map(Metric::from_group),
            top_temperature_bucket: temperature_buckets.first().map(Metric::from_group),
            time_buckets,
            temperature_buckets,
        }
    }
}
