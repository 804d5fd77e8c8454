//! Reference data endpoints.

use axum::{Router, routing::post};
use ecoreport_db::entities::{Barangay, IssueCategory, ReportStatus};

use crate::{middleware::AppState, response::ApiResponse};

/// Issue categories a report can be filed under.
async fn categories() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(IssueCategory::ALL.iter().map(IssueCategory::as_str).collect())
}

/// Barangays served.
async fn barangays() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(Barangay::ALL.iter().map(Barangay::as_str).collect())
}

/// Report statuses, in workflow order.
async fn statuses() -> ApiResponse<Vec<&'static str>> {
    ApiResponse::ok(ReportStatus::ALL.iter().map(ReportStatus::as_str).collect())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", post(categories))
        .route("/barangays", post(barangays))
        .route("/statuses", post(statuses))
}
