//! ecoreport server entry point.

use std::sync::Arc;

use anyhow::Context;
use axum::{Json, Router, routing::get};
use ecoreport_api::AppState;
use ecoreport_common::{Config, SharedClock, SystemClock};
use ecoreport_core::{AdminAuthService, CommentService, ReportService, VerificationService};
use ecoreport_db::{Database, fixtures};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Wire stores and services together.
fn build_state(config: &Config, db: &Database, clock: SharedClock) -> AppState {
    let verification_service = VerificationService::new(config.verification.clone(), clock.clone());

    AppState {
        report_service: ReportService::new(
            db.reports(),
            verification_service.clone(),
            config.submission.clone(),
        ),
        comment_service: CommentService::new(
            db.comments(),
            verification_service.clone(),
            config.submission.clone(),
        ),
        verification_service,
        admin_auth_service: AdminAuthService::new(config.admin.clone(), clock),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecoreport=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting ecoreport server...");

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    let clock: SharedClock = Arc::new(SystemClock);
    let db = Database::with_clock(clock.clone());
    if config.store.seed_demo_data {
        fixtures::seed_demo_data(&db)
            .await
            .context("Failed to seed demo data")?;
        info!("Seeded demo data");
    }

    let state = build_state(&config, &db, clock);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", ecoreport_api::app(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server with graceful shutdown
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(addr = %addr, url = %config.server.url, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
