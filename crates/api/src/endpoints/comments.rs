//! Public comment endpoints.

use axum::{Json, Router, extract::State, routing::post};
use ecoreport_common::AppResult;
use ecoreport_core::SubmitCommentInput;
use serde::Deserialize;

use crate::{
    middleware::AppState,
    response::{ApiResponse, CommentResponse},
};

/// List comments request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsRequest {
    pub report_id: String,
}

/// Comments on a report, newest first.
async fn list(
    State(state): State<AppState>,
    Json(req): Json<ListCommentsRequest>,
) -> ApiResponse<Vec<CommentResponse>> {
    let comments = state.comment_service.list(&req.report_id).await;
    ApiResponse::ok(comments.into_iter().map(CommentResponse::public).collect())
}

/// Comment on a report.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<SubmitCommentInput>,
) -> AppResult<ApiResponse<CommentResponse>> {
    let comment = state.comment_service.submit(req).await?;
    Ok(ApiResponse::ok(CommentResponse::public(comment)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", post(list))
        .route("/create", post(create))
}
