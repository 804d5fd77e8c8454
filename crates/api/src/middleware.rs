//! API middleware.

#![allow(missing_docs)]

use axum::{
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use ecoreport_core::{AdminAuthService, CommentService, ReportService, VerificationService};

/// Application state.
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
    pub comment_service: CommentService,
    pub verification_service: VerificationService,
    pub admin_auth_service: AdminAuthService,
}

/// Authentication middleware.
///
/// Attaches the admin session for a valid bearer token. Requests without one
/// pass through untouched; the [`Admin`](crate::extractors::Admin) extractor
/// rejects them where a session is required.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(auth_header) = req.headers().get(header::AUTHORIZATION)
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str.strip_prefix("Bearer ")
    {
        match state.admin_auth_service.authenticate(token.trim()).await {
            Ok(session) => {
                req.extensions_mut().insert(session);
            }
            Err(e) => tracing::debug!(error = %e, "Ignoring bearer token"),
        }
    }

    next.run(req).await
}
