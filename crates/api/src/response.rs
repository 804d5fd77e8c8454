//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecoreport_common::to_api_string;
use ecoreport_core::phone;
use ecoreport_db::entities::{
    Barangay, Comment, IssueCategory, Report, ReportImage, ReportStatus,
};
use serde::Serialize;

/// Standard API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a success response.
    pub const fn ok(data: T) -> Self {
        Self { data }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Empty success response.
#[must_use]
pub fn ok() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}

/// Report response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: String,
    pub reporter_name: String,
    pub reporter_phone_number: String,
    pub reporter_barangay: Barangay,
    pub issue_description: String,
    pub issue_category: IssueCategory,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landmark: Option<String>,
    pub images: Vec<ReportImage>,
    pub status: ReportStatus,
    pub submission_timestamp: String,
    pub last_updated_timestamp: String,
    pub upvote_count: u64,
    pub comment_count: u64,
}

impl ReportResponse {
    /// Public view, with the reporter's phone number masked.
    #[must_use]
    pub fn public(report: Report) -> Self {
        phone::redact_report(report).into()
    }
}

impl From<Report> for ReportResponse {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            reporter_name: report.reporter_name,
            reporter_phone_number: report.reporter_phone_number,
            reporter_barangay: report.reporter_barangay,
            issue_description: report.issue_description,
            issue_category: report.issue_category,
            latitude: report.latitude,
            longitude: report.longitude,
            street: report.street,
            landmark: report.landmark,
            images: report.images,
            status: report.status,
            submission_timestamp: to_api_string(&report.submission_timestamp),
            last_updated_timestamp: to_api_string(&report.last_updated_timestamp),
            upvote_count: report.upvote_count,
            comment_count: report.comment_count,
        }
    }
}

/// Comment response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub report_id: String,
    pub commenter_name: String,
    pub commenter_phone_number: String,
    pub commenter_barangay: Barangay,
    pub comment_text: String,
    pub comment_timestamp: String,
}

impl CommentResponse {
    /// Public view: the commenter's name shortened and phone number masked.
    #[must_use]
    pub fn public(comment: Comment) -> Self {
        phone::redact_comment(comment).into()
    }
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            report_id: comment.report_id,
            commenter_name: comment.commenter_name,
            commenter_phone_number: comment.commenter_phone_number,
            commenter_barangay: comment.commenter_barangay,
            comment_text: comment.comment_text,
            comment_timestamp: to_api_string(&comment.comment_timestamp),
        }
    }
}
