//! Request extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use ecoreport_common::AppError;
use ecoreport_core::AdminSession;

/// Authenticated admin extractor.
#[derive(Debug, Clone)]
pub struct Admin(pub AdminSession);

impl<S> FromRequestParts<S> for Admin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by auth middleware
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .map(Admin)
            .ok_or_else(|| AppError::Unauthorized("Admin login required".to_string()))
    }
}
