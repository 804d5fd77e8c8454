//! Phone verification service.
//!
//! A mock one-time-password flow: no SMS is sent. Any all-digit code of the
//! configured length is accepted, and [`DEMO_CODE`] is advertised to clients.
//! A successful verification yields a single-use token bound to the phone
//! number, which the submission workflows consume.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use ecoreport_common::{
    AppError, AppResult, IdGenerator, SharedClock, Timestamp, config::VerificationConfig,
};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::phone;

/// Code shown to users of the demo deployment.
pub const DEMO_CODE: &str = "123456";

/// A pending code challenge.
#[derive(Debug, Clone)]
struct Challenge {
    phone: String,
    expires_at: Timestamp,
}

/// A verified phone number waiting to be used.
#[derive(Debug, Clone)]
struct Grant {
    phone: String,
    expires_at: Timestamp,
}

/// A spent token, kept so a submission that fails afterwards can hand it back.
#[derive(Debug)]
pub struct SpentToken {
    token: String,
    grant: Grant,
}

/// Response to a code request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChallenge {
    /// The challenge ID to pass to [`VerificationService::verify`].
    pub challenge_id: String,
    /// Masked phone number the code was "sent" to.
    pub phone_number: String,
    /// The code to enter in the demo deployment.
    pub demo_code: &'static str,
    pub expires_at: Timestamp,
}

/// Proof that a phone number was verified.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Mock OTP verification service.
#[derive(Clone)]
pub struct VerificationService {
    config: VerificationConfig,
    clock: SharedClock,
    id_gen: IdGenerator,
    challenges: Arc<RwLock<HashMap<String, Challenge>>>,
    grants: Arc<RwLock<HashMap<String, Grant>>>,
}

impl VerificationService {
    /// Create a new verification service.
    #[must_use]
    pub fn new(config: VerificationConfig, clock: SharedClock) -> Self {
        Self {
            config,
            clock,
            id_gen: IdGenerator::new(),
            challenges: Arc::new(RwLock::new(HashMap::new())),
            grants: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn ttl(&self) -> Duration {
        Duration::seconds(self.config.ttl_secs)
    }

    /// Open a code challenge for a phone number.
    pub async fn request_code(&self, phone_number: &str) -> AppResult<CodeChallenge> {
        if !phone::is_valid(phone_number) {
            return Err(AppError::Validation(format!(
                "Phone number must have {} digits",
                phone::PHONE_DIGITS
            )));
        }

        let now = self.clock.now();
        let challenge_id = self.id_gen.generate();
        let expires_at = now + self.ttl();

        {
            let mut challenges = self.challenges.write().await;
            challenges.retain(|_, c| c.expires_at > now);
            challenges.insert(
                challenge_id.clone(),
                Challenge {
                    phone: phone::normalize(phone_number),
                    expires_at,
                },
            );
        }

        tracing::debug!(challenge_id = %challenge_id, "Verification code requested");

        Ok(CodeChallenge {
            challenge_id,
            phone_number: phone::mask(phone_number),
            demo_code: DEMO_CODE,
            expires_at,
        })
    }

    /// Complete a challenge. Challenges are single-use, even on a bad code.
    pub async fn verify(&self, challenge_id: &str, code: &str) -> AppResult<VerificationToken> {
        let challenge = {
            let mut challenges = self.challenges.write().await;
            challenges.remove(challenge_id).ok_or_else(|| {
                AppError::Validation("Invalid or expired verification challenge".to_string())
            })?
        };

        let now = self.clock.now();
        if now > challenge.expires_at {
            return Err(AppError::Validation(
                "Invalid or expired verification challenge".to_string(),
            ));
        }

        if code.len() != self.config.code_length || !code.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::Validation(format!(
                "Verification code must be {} digits",
                self.config.code_length
            )));
        }

        let token = self.id_gen.generate_token();
        let expires_at = now + self.ttl();
        {
            let mut grants = self.grants.write().await;
            grants.retain(|_, g| g.expires_at > now);
            grants.insert(
                token.clone(),
                Grant {
                    phone: challenge.phone,
                    expires_at,
                },
            );
        }

        tracing::debug!(challenge_id = %challenge_id, "Phone number verified");
        Ok(VerificationToken { token, expires_at })
    }

    /// Spend a token on `phone_number`.
    ///
    /// A token issued for a different number is rejected and stays usable.
    pub async fn consume(&self, token: &str, phone_number: &str) -> AppResult<SpentToken> {
        let now = self.clock.now();
        let mut grants = self.grants.write().await;

        let grant = grants
            .remove(token)
            .ok_or_else(|| AppError::Validation("Phone number is not verified".to_string()))?;

        if now > grant.expires_at {
            return Err(AppError::Validation(
                "Phone verification has expired".to_string(),
            ));
        }

        if grant.phone != phone::normalize(phone_number) {
            grants.insert(token.to_string(), grant);
            return Err(AppError::Validation(
                "Verification was issued for a different phone number".to_string(),
            ));
        }

        Ok(SpentToken {
            token: token.to_string(),
            grant,
        })
    }

    /// Make a spent token usable again until its original expiry.
    pub async fn refund(&self, spent: SpentToken) {
        tracing::debug!("Verification token refunded");
        self.grants.write().await.insert(spent.token, spent.grant);
    }
}
