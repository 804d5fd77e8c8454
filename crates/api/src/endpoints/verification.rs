//! Phone verification endpoints.

use axum::{Json, Router, extract::State, routing::post};
use ecoreport_common::AppResult;
use ecoreport_core::{CodeChallenge, VerificationToken};
use serde::Deserialize;

use crate::{middleware::AppState, response::ApiResponse};

/// Code request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCodeRequest {
    pub phone_number: String,
}

async fn request_code(
    State(state): State<AppState>,
    Json(req): Json<RequestCodeRequest>,
) -> AppResult<ApiResponse<CodeChallenge>> {
    let challenge = state
        .verification_service
        .request_code(&req.phone_number)
        .await?;
    Ok(ApiResponse::ok(challenge))
}

/// Code submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub challenge_id: String,
    pub code: String,
}

async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> AppResult<ApiResponse<VerificationToken>> {
    let token = state
        .verification_service
        .verify(&req.challenge_id, req.code.trim())
        .await?;
    Ok(ApiResponse::ok(token))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/request", post(request_code))
        .route("/verify", post(verify))
}
