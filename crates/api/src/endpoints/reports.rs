//! Public report endpoints.

use axum::{Json, Router, extract::State, routing::post};
use ecoreport_common::AppResult;
use ecoreport_core::{ReportSort, SubmitReportInput};
use serde::Deserialize;

use crate::{
    middleware::AppState,
    response::{ApiResponse, ReportResponse},
};

/// Request naming one report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIdRequest {
    pub report_id: String,
}

/// Listing request.
#[derive(Debug, Default, Deserialize)]
pub struct ListRequest {
    #[serde(default)]
    pub sort: ReportSort,
}

/// List all reports, newest first unless another order is asked for.
async fn list(
    State(state): State<AppState>,
    Json(req): Json<ListRequest>,
) -> ApiResponse<Vec<ReportResponse>> {
    let reports = state.report_service.list(req.sort).await;
    ApiResponse::ok(reports.into_iter().map(ReportResponse::public).collect())
}

/// Show a single report.
async fn show(
    State(state): State<AppState>,
    Json(req): Json<ReportIdRequest>,
) -> AppResult<ApiResponse<ReportResponse>> {
    let report = state.report_service.get(&req.report_id).await?;
    Ok(ApiResponse::ok(ReportResponse::public(report)))
}

/// Submit a new report.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<SubmitReportInput>,
) -> AppResult<ApiResponse<ReportResponse>> {
    let report = state.report_service.submit(req).await?;
    Ok(ApiResponse::ok(ReportResponse::public(report)))
}

/// Upvote a report.
async fn upvote(
    State(state): State<AppState>,
    Json(req): Json<ReportIdRequest>,
) -> AppResult<ApiResponse<ReportResponse>> {
    let report = state.report_service.upvote(&req.report_id).await?;
    Ok(ApiResponse::ok(ReportResponse::public(report)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", post(list))
        .route("/show", post(show))
        .route("/create", post(create))
        .route("/upvote", post(upvote))
}
