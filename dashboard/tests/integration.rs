//! Integration tests for the dashboard HTTP API
//!
//! Drive the full router (real handlers, real static file service) with
//! in-memory requests.

mod fixtures;
mod helpers;

use axum::http::StatusCode;
use shared::Year;

use fixtures::*;
use helpers::*;

#[tokio::test]
async fn test_worked_example_through_api() {
    let (_static_dir, router) = create_test_router(two_row_table(), None);

    let (status, monthly) = get_json(&router, "/api/monthly?year=2011").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(monthly["months"][0]["month"], "January");
    assert_eq!(monthly["months"][0]["total"], 30);
    assert_eq!(monthly["total"], 30);

    let (_, time) = get_json(&router, "/api/time-buckets").await;
    assert_eq!(time["groups"][0]["key"], "Afternoon");
    assert_eq!(time["groups"][0]["total"], 20);
    assert_eq!(time["groups"][1]["key"], "Evening");
    assert_eq!(time["groups"][1]["total"], 10);
    assert_eq!(time["groups"].as_array().unwrap().len(), 2);

    let (_, temperature) = get_json(&router, "/api/temperature-buckets").await;
    assert_eq!(temperature["groups"][0]["key"], "Hot");
    assert_eq!(temperature["groups"][0]["total"], 20);
    assert_eq!(temperature["groups"][1]["key"], "Cold");
    assert_eq!(temperature["groups"][1]["total"], 10);
}

#[tokio::test]
async fn test_monthly_uses_default_year() {
    let (_static_dir, router) = create_test_router(multi_year_table(), Some(Year(2012)));

    let (status, monthly) = get_json(&router, "/api/monthly").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(monthly["year"], 2012);
    assert_eq!(monthly["months"][2]["total"], 820);
    assert_eq!(monthly["months"][11]["total"], 12);
    assert_eq!(monthly["highlights"]["highest"]["display"], "820 (Mar)");
    assert_eq!(monthly["highlights"]["lowest"]["display"], "12 (Dec)");
}

#[tokio::test]
async fn test_unknown_year_is_empty_not_an_error() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    let (status, monthly) = get_json(&router, "/api/monthly?year=1999").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(monthly["total"], 0);
    assert_eq!(monthly["months"].as_array().unwrap().len(), 12);
    assert!(monthly["highlights"]["highest"].is_null());
}

#[tokio::test]
async fn test_non_numeric_year_is_bad_request() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    let (status, _) = get(&router, "/api/monthly?year=last").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_table_without_default_year() {
    let (_static_dir, router) = create_test_router(shared::RentalTable::default(), None);

    let (status, _) = get(&router, "/api/dashboard").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, hourly) = get_json(&router, "/api/hourly").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hourly["total"], 0);
    assert!(hourly["groups"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_hourly_ranking_is_descending() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    let (status, hourly) = get_json(&router, "/api/hourly").await;
    assert_eq!(status, StatusCode::OK);

    let groups = hourly["groups"].as_array().unwrap();
    let totals: Vec<u64> = groups.iter().map(|g| g["total"].as_u64().unwrap()).collect();
    assert!(totals.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(hourly["total"], 2_368);
    assert_eq!(groups[0]["key"], "17:00");
    assert_eq!(groups[0]["total"], 950);
}

#[tokio::test]
async fn test_years_endpoint() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    let (status, years) = get_json(&router, "/api/years").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(years["years"], serde_json::json!([2011, 2012]));
    assert_eq!(years["default_year"], 2011);
}

#[tokio::test]
async fn test_dashboard_view_and_view_counter() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    let (status, view) = get_json(&router, "/api/dashboard?year=2011").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["year"], 2011);
    assert_eq!(view["year_total"], 1_536);
    assert_eq!(view["monthly_highlights"]["highest"]["display"], "1060 (Jul)");
    assert_eq!(view["hourly_highlights"]["busiest"].as_array().unwrap().len(), 5);
    assert_eq!(view["top_time_bucket"]["label"], "Afternoon");

    let _ = get(&router, "/api/dashboard").await;
    let (_, health) = get_json(&router, "/health").await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["views_served"], 2);
    assert_eq!(health["records"], 8);
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (_static_dir, router) = create_test_router(multi_year_table(), None);

    for uri in ["/api/hourly", "/api/time-buckets", "/api/temperature-buckets", "/api/monthly?year=2012"] {
        let (_, first) = get(&router, uri).await;
        let (_, second) = get(&router, uri).await;
        assert_eq!(first, second, "{uri} changed between requests");
    }
}

#[tokio::test]
async fn test_index_and_static_assets() {
    let (_static_dir, router) = create_test_router(two_row_table(), None);

    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "<html>dashboard index</html>");

    let (status, body) = get(&router, "/static/logo.png").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![1u8, 2, 3]);

    let (status, _) = get(&router, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
