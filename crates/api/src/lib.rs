//! HTTP API layer for ecoreport.
//!
//! - **Endpoints**: POST-with-JSON routes for citizens and admins
//! - **Extractors**: admin session
//! - **Middleware**: bearer token resolution
//!
//! Built on Axum 0.8.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

use axum::Router;

pub use endpoints::router;
pub use middleware::AppState;

/// The API router with the auth middleware applied and state attached.
pub fn app(state: AppState) -> Router {
    router()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth_middleware,
        ))
        .with_state(state)
}
