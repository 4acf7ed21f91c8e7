//! REST API handlers
//!
//! Each endpoint recomputes its aggregation from the shared table on every
//! request; nothing is cached.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use std::sync::Arc;

use shared::{Component, Year, component_debug, component_warn};

use crate::core::{self, DashboardView, HourOfDay, MonthlyHighlights, TemperatureBucket, TimeBucket};
use crate::state::DashboardState;
use crate::types::{HealthResponse, MonthlyResponse, RankingResponse, YearQuery, YearsResponse};

fn require_year(state: &DashboardState, query: YearQuery) -> Result<Year, StatusCode> {
    state.resolve_year(query.year).ok_or_else(|| {
        component_warn!(Component::Server, "No year requested and no default year available");
        StatusCode::BAD_REQUEST
    })
}

/// Year selector options - /api/years
pub async fn get_years(State(state): State<Arc<DashboardState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.available_years(),
        default_year: state.default_year(),
    })
}

/// Monthly totals for a year - /api/monthly?year=
pub async fn get_monthly(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<YearQuery>,
) -> Result<Json<MonthlyResponse>, StatusCode> {
    let year = require_year(&state, query)?;
    let months = core::monthly_totals(state.table(), year);

    component_debug!(Component::Aggregation, "Computed monthly totals for {}", year);

    Ok(Json(MonthlyResponse {
        year,
        total: months.iter().map(|m| m.total).sum(),
        highlights: MonthlyHighlights::from_months(&months),
        months,
    }))
}

/// Totals per hour - /api/hourly
pub async fn get_hourly(State(state): State<Arc<DashboardState>>) -> Json<RankingResponse<HourOfDay>> {
    Json(RankingResponse::new(core::hourly_totals(state.table())))
}

/// Totals per time-of-day bucket - /api/time-buckets
pub async fn get_time_buckets(State(state): State<Arc<DashboardState>>) -> Json<RankingResponse<TimeBucket>> {
    Json(RankingResponse::new(core::time_bucket_totals(state.table())))
}

/// Totals per temperature bucket - /api/temperature-buckets
pub async fn get_temperature_buckets(
    State(state): State<Arc<DashboardState>>,
) -> Json<RankingResponse<TemperatureBucket>> {
    Json(RankingResponse::new(core::temperature_bucket_totals(state.table())))
}

/// Full dashboard view - /api/dashboard?year=
pub async fn get_dashboard(
    State(state): State<Arc<DashboardState>>,
    Query(query): Query<YearQuery>,
) -> Result<Json<DashboardView>, StatusCode> {
    let year = require_year(&state, query)?;
    let view = DashboardView::build(state.table(), year);
    let served = state.record_view();

    component_debug!(Component::Server, "📊 Rendered dashboard view #{} for {}", served, year);

    Ok(Json(view))
}

/// Health check endpoint - /health
pub async fn health_check(State(state): State<Arc<DashboardState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        records: state.table().len(),
        total_rentals: state.table().total_rentals(),
        views_served: state.views_served(),
        timestamp: Utc::now().timestamp(),
    })
}
