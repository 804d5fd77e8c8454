//! API endpoints.

mod admin;
mod comments;
mod meta;
mod reports;
mod verification;

use axum::Router;

use crate::middleware::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/meta", meta::router())
        .nest("/verification", verification::router())
        .nest("/reports", reports::router())
        .nest("/comments", comments::router())
        .nest("/admin", admin::router())
}
