//! Admin authentication service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use ecoreport_common::{
    AppError, AppResult, IdGenerator, SharedClock, Timestamp, config::AdminConfig,
};
use serde::Serialize;
use tokio::sync::RwLock;

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    /// Bearer token for the `Authorization` header.
    pub token: String,
    pub username: String,
    pub expires_at: Timestamp,
}

/// Single-account admin login backed by the configured credential pair.
#[derive(Clone)]
pub struct AdminAuthService {
    config: AdminConfig,
    clock: SharedClock,
    id_gen: IdGenerator,
    sessions: Arc<RwLock<HashMap<String, AdminSession>>>,
}

impl AdminAuthService {
    /// Create a new admin auth service.
    #[must_use]
    pub fn new(config: AdminConfig, clock: SharedClock) -> Self {
        Self {
            config,
            clock,
            id_gen: IdGenerator::new(),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Check credentials and open a session.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<AdminSession> {
        if username != self.config.username || password != self.config.password {
            tracing::warn!(username = %username, "Rejected admin login");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let now = self.clock.now();
        let session = AdminSession {
            token: self.id_gen.generate_token(),
            username: username.to_string(),
            expires_at: now + Duration::seconds(self.config.session_ttl_secs),
        };

        {
            let mut sessions = self.sessions.write().await;
            sessions.retain(|_, s| s.expires_at > now);
            sessions.insert(session.token.clone(), session.clone());
        }

        tracing::info!(username = %username, "Admin logged in");
        Ok(session)
    }

    /// Resolve a bearer token to its session.
    pub async fn authenticate(&self, token: &str) -> AppResult<AdminSession> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        match sessions.get(token) {
            Some(session) if session.expires_at > now => Ok(session.clone()),
            Some(_) => {
                sessions.remove(token);
                Err(AppError::Unauthorized("Session expired".to_string()))
            }
            None => Err(AppError::Unauthorized("Invalid session".to_string())),
        }
    }

    /// End a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) {
        if let Some(session) = self.sessions.write().await.remove(token) {
            tracing::info!(username = %session.username, "Admin logged out");
        }
    }
}
