//! Application configuration.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Admin credential configuration.
    pub admin: AdminConfig,
    /// In-memory store configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Phone verification configuration.
    #[serde(default)]
    pub verification: VerificationConfig,
    /// Submission limits applied by the workflows.
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind to.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Public URL of this instance.
    pub url: String,
}

/// The single shared admin credential.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
    /// Lifetime of an admin session token, in seconds.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: i64,
}

/// Store configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Load the demo reports and comments at startup.
    #[serde(default)]
    pub seed_demo_data: bool,
}

/// Phone verification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationConfig {
    /// Number of digits in a verification code.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Lifetime of challenges and verification tokens, in seconds.
    #[serde(default = "default_verification_ttl_secs")]
    pub ttl_secs: i64,
}

/// Limits enforced by the submission and comment workflows.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Maximum number of evidence images per report.
    #[serde(default = "default_max_images")]
    pub max_images: usize,
    /// Maximum report description length, in characters.
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
    /// Maximum comment length, in characters.
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            ttl_secs: default_verification_ttl_secs(),
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_images: default_max_images(),
            max_description_length: default_max_description_length(),
            max_comment_length: default_max_comment_length(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_session_ttl_secs() -> i64 {
    86_400
}

const fn default_code_length() -> usize {
    6
}

const fn default_verification_ttl_secs() -> i64 {
    600
}

const fn default_max_images() -> usize {
    3
}

const fn default_max_description_length() -> usize {
    2000
}

const fn default_max_comment_length() -> usize {
    1000
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Configuration is loaded in the following order:
    /// 1. `.env` (if present)
    /// 2. `config/default.toml`
    /// 3. `config/{environment}.toml` (based on `ECOREPORT_ENV`)
    /// 4. Environment variables with `ECOREPORT__` prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        // A missing .env is normal outside development
        let _ = dotenvy::dotenv();

        let env = std::env::var("ECOREPORT_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ECOREPORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
