//! Read-only endpoints: milk totals, the farm report and feed formulas.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use super::{bad_request, error_response};
use crate::domain::{feed_formulas, MilkTotalsQuery};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Routes merged into the milk record router
pub fn milk_router() -> Router<AppState> {
    Router::new().route("/totals", get(get_milk_totals))
}

pub async fn get_milk_totals(
    State(state): State<AppState>,
    Query(query): Query<MilkTotalsQuery>,
) -> Response {
    info!("GET /api/milk-records/totals - query: {:?}", query);

    if let Err(response) = month_filter(query.year, query.month) {
        return response;
    }

    match state.milk_production_service.totals(query) {
        Ok(totals) => (StatusCode::OK, Json(totals)).into_response(),
        Err(e) => error_response("Failed to calculate milk totals", e),
    }
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    info!("GET /api/reports - query: {:?}", query);

    let month = match month_filter(query.year, query.month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    match state.report_service.report(month) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => error_response("Failed to build report", e),
    }
}

/// Year and month come as a pair with the month in 1..=12, or not at all
fn month_filter(year: Option<i32>, month: Option<u32>) -> Result<Option<(i32, u32)>, Response> {
    match (year, month) {
        (Some(year), Some(month)) if (1..=12).contains(&month) => Ok(Some((year, month))),
        (Some(_), Some(month)) => Err(bad_request(format!("Month must be 1-12, got {}", month))),
        (None, None) => Ok(None),
        _ => Err(bad_request("Year and month must be given together")),
    }
}

pub async fn list_feeds() -> Response {
    info!("GET /api/feeds");
    (StatusCode::OK, Json(feed_formulas())).into_response()
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_utils::{send, setup_logged_in_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_milk_totals_after_adding_records() {
        let (app, _) = setup_logged_in_app().await;

        for (amount, date) in [("10", "2024-01-01"), ("5", "2024-01-01"), ("7", "2024-01-02")] {
            let (status, _) = send(
                &app,
                Method::POST,
                "/api/milk-records",
                Some(json!({"amount": amount, "time": "morning", "date": date})),
            )
            .await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/milk-records/totals?date=2024-01-01&year=2024&month=1",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_for_date"], 15.0);
        assert_eq!(body["total_for_month"], 22.0);
        assert_eq!(body["all_time_total"], 87.0);
        assert_eq!(body["records_for_date"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_milk_totals_reject_incomplete_month() {
        let (app, _) = setup_logged_in_app().await;

        for uri in [
            "/api/milk-records/totals?year=2024",
            "/api/milk-records/totals?month=1",
            "/api/milk-records/totals?year=2024&month=13",
            "/api/milk-records/totals?year=2024&month=0",
        ] {
            let (status, body) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert!(body["error"].is_string());
        }

        let (status, body) =
            send(&app, Method::GET, "/api/milk-records/totals?date=2023-12-19", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_for_date"], 65.0);
    }

    #[tokio::test]
    async fn test_report_with_and_without_month() {
        let (app, _) = setup_logged_in_app().await;

        let (status, body) = send(&app, Method::GET, "/api/reports", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_revenue"], 6285.0);
        assert_eq!(body["net_revenue"], 689.0);
        assert_eq!(body["income_by_source"][0]["name"], "Cow sale");
        assert!(body["monthly"].is_null());

        let (_, body) = send(&app, Method::GET, "/api/reports?year=2023&month=12", None).await;
        assert_eq!(body["monthly"]["expenditure"], 5596.0);

        let (status, _) = send(&app, Method::GET, "/api/reports?year=2023", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::GET, "/api/reports?year=2023&month=13", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_feeds() {
        let (app, _) = setup_logged_in_app().await;

        let (status, body) = send(&app, Method::GET, "/api/feeds", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 3);
        assert_eq!(body[0]["title"], "High Yielder Dairy Supplement");
    }
}
