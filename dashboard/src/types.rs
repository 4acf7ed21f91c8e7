//! Type definitions for the dashboard HTTP API
//!
//! Request and response bodies exchanged with the browser.

use serde::{Deserialize, Serialize};
use shared::Year;

use crate::core::{GroupTotal, MonthTotal, MonthlyHighlights};

/// `?year=` selector accepted by the monthly and dashboard endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct YearQuery {
    pub year: Option<Year>,
}

/// Options for the year selector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearsResponse {
    pub years: Vec<Year>,
    pub default_year: Option<Year>,
}

/// Monthly totals for one year
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyResponse {
    pub year: Year,
    pub total: u64,
    pub months: Vec<MonthTotal>,
    pub highlights: MonthlyHighlights,
}

/// A ranked grouping (hours or buckets), highest first
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse<K> {
    pub total: u64,
    pub groups: Vec<GroupTotal<K>>,
}

impl<K> RankingResponse<K> {
    pub fn new(groups: Vec<GroupTotal<K>>) -> Self {
        Self {
            total: crate::core::aggregation::grand_total(&groups),
            groups,
        }
    }
}

/// Health endpoint body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub records: usize,
    pub total_rentals: u64,
    pub views_served: u64,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeBucket;

    #[test]
    fn test_ranking_response_total() {
        let response = RankingResponse::new(vec![
            GroupTotal { key: TimeBucket::Afternoon, total: 20 },
            GroupTotal { key: TimeBucket::Evening, total: 10 },
        ]);

        assert_eq!(response.total, 30);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["groups"][0]["key"], "Afternoon");
    }

    #[test]
    fn test_year_query_deserialization() {
        let query: YearQuery = serde_json::from_str(r#"{"year": 2012}"#).unwrap();
        assert_eq!(query.year, Some(Year(2012)));

        let empty: YearQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.year, None);
    }
}
