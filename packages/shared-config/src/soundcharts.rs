//! Soundcharts API configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};
use crate::LoggingConfig;
use std::env;

/// Production API URL
pub const DEFAULT_BASE_URL: &str = "https://customer.api.soundcharts.com";

/// Soundcharts API client configuration
#[derive(Clone)]
pub struct SoundchartsConfig {
    /// Application identifier sent as `x-app-id`
    pub app_id: String,

    /// API key sent as `x-api-key`
    pub api_key: String,

    /// API base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum number of attempts per request (transient failures only)
    pub max_retries: u32,

    /// Delay between attempts after a server error, in seconds
    pub retry_delay_secs: u64,

    /// Delay after a request-quota 429, in seconds
    pub rate_limit_delay_secs: u64,

    /// Log thresholds
    pub logging: LoggingConfig,
}

impl std::fmt::Debug for SoundchartsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundchartsConfig")
            .field("app_id", &self.app_id)
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_secs", &self.retry_delay_secs)
            .field("rate_limit_delay_secs", &self.rate_limit_delay_secs)
            .field("logging", &self.logging)
            .finish()
    }
}

impl SoundchartsConfig {
    /// Load Soundcharts configuration from environment variables
    ///
    /// A `.env` file in the working directory is read first, if present.
    /// `SOUNDCHARTS_APP_ID` and `SOUNDCHARTS_API_KEY` are required.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let app_id = get_required_env("SOUNDCHARTS_APP_ID")?;
        let api_key = get_required_env("SOUNDCHARTS_API_KEY")?;

        let config = Self {
            app_id,
            api_key,
            base_url: get_env_or_default("SOUNDCHARTS_BASE_URL", DEFAULT_BASE_URL),
            timeout_secs: parse_env("SOUNDCHARTS_TIMEOUT", 10)?,
            max_retries: parse_env("SOUNDCHARTS_MAX_RETRIES", 5)?,
            retry_delay_secs: parse_env("SOUNDCHARTS_RETRY_DELAY", 10)?,
            rate_limit_delay_secs: parse_env("SOUNDCHARTS_RATE_LIMIT_DELAY", 30)?,
            logging: LoggingConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check if credentials are present in the environment
    pub fn is_configured() -> bool {
        env::var("SOUNDCHARTS_APP_ID").is_ok() && env::var("SOUNDCHARTS_API_KEY").is_ok()
    }

    /// Create a configuration with explicit credentials and default settings
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            max_retries: 5,
            retry_delay_secs: 10,
            rate_limit_delay_secs: 30,
            logging: LoggingConfig::default(),
        }
    }

    /// Override the base URL (useful for testing against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reject empty credentials and an empty base URL
    pub fn validate(&self) -> ConfigResult<()> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SOUNDCHARTS_APP_ID".to_string(),
                "app id cannot be empty".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SOUNDCHARTS_API_KEY".to_string(),
                "API key cannot be empty".to_string(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidUrl(
                "SOUNDCHARTS_BASE_URL".to_string(),
                "URL cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Get the credential headers attached to every request
    pub fn api_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x-app-id", self.app_id.clone()),
            ("x-api-key", self.api_key.clone()),
        ]
    }
}
