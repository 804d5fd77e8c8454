//! Admin endpoints.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use ecoreport_common::AppResult;
use ecoreport_core::{AdminSession, ReportQuery, ReportStats};
use ecoreport_db::entities::ReportStatus;
use serde::{Deserialize, Serialize};

use crate::{
    extractors::Admin,
    middleware::AppState,
    response::{self, ApiResponse, CommentResponse, ReportResponse},
};

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<ApiResponse<AdminSession>> {
    let session = state
        .admin_auth_service
        .login(req.username.trim(), &req.password)
        .await?;
    Ok(ApiResponse::ok(session))
}

async fn logout(Admin(session): Admin, State(state): State<AppState>) -> impl IntoResponse {
    state.admin_auth_service.logout(&session.token).await;
    response::ok()
}

/// Dashboard listing: filtered, searched and sorted, with full phone numbers.
async fn list_reports(
    Admin(_): Admin,
    State(state): State<AppState>,
    Json(query): Json<ReportQuery>,
) -> ApiResponse<Vec<ReportResponse>> {
    let reports = state.report_service.query(&query).await;
    ApiResponse::ok(reports.into_iter().map(ReportResponse::from).collect())
}

async fn stats(Admin(_): Admin, State(state): State<AppState>) -> ApiResponse<ReportStats> {
    ApiResponse::ok(state.report_service.stats().await)
}

/// Status update request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub report_id: String,
    pub status: ReportStatus,
}

async fn update_status(
    Admin(session): Admin,
    State(state): State<AppState>,
    Json(req): Json<UpdateStatusRequest>,
) -> AppResult<ApiResponse<ReportResponse>> {
    let report = state
        .report_service
        .update_status(&req.report_id, req.status)
        .await?;
    tracing::info!(admin = %session.username, report_id = %report.id, "Status changed by admin");
    Ok(ApiResponse::ok(report.into()))
}

/// Request naming one report.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportIdRequest {
    pub report_id: String,
}

/// Deletion summary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteReportResponse {
    pub id: String,
    pub comments_removed: u64,
}

async fn delete_report(
    Admin(session): Admin,
    State(state): State<AppState>,
    Json(req): Json<ReportIdRequest>,
) -> AppResult<ApiResponse<DeleteReportResponse>> {
    let report = state.report_service.delete(&req.report_id).await?;
    tracing::info!(admin = %session.username, report_id = %report.id, "Report deleted by admin");
    Ok(ApiResponse::ok(DeleteReportResponse {
        id: report.id,
        comments_removed: report.comment_count,
    }))
}

/// Unmasked comments on a report.
async fn list_comments(
    Admin(_): Admin,
    State(state): State<AppState>,
    Json(req): Json<ReportIdRequest>,
) -> ApiResponse<Vec<CommentResponse>> {
    let comments = state.comment_service.list(&req.report_id).await;
    ApiResponse::ok(comments.into_iter().map(CommentResponse::from).collect())
}

/// Request naming one comment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentIdRequest {
    pub comment_id: String,
}

async fn delete_comment(
    Admin(session): Admin,
    State(state): State<AppState>,
    Json(req): Json<CommentIdRequest>,
) -> AppResult<ApiResponse<CommentResponse>> {
    let comment = state.comment_service.delete(&req.comment_id).await?;
    tracing::info!(admin = %session.username, comment_id = %comment.id, "Comment deleted by admin");
    Ok(ApiResponse::ok(comment.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        // Reports
        .route("/reports/list", post(list_reports))
        .route("/reports/stats", post(stats))
        .route("/reports/update-status", post(update_status))
        .route("/reports/delete", post(delete_report))
        // Comments
        .route("/comments/list", post(list_comments))
        .route("/comments/delete", post(delete_comment))
}
