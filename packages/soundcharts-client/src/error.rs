//! Soundcharts API error types

use soundcharts_shared_config::ConfigError;
use thiserror::Error;
use tracing::Level;

/// Marker the API puts in 429 bodies when the per-period request quota is hit
const QUOTA_MESSAGE: &str = "maximum request count";

/// Soundcharts API client errors
#[derive(Error, Debug)]
pub enum SoundchartsError {
    /// App id or API key is missing
    #[error("app id and API key are required for Soundcharts API access")]
    MissingCredentials,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid input provided to an API method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request to Soundcharts timed out")]
    Timeout,

    /// JSON parsing failed
    #[error("Failed to parse Soundcharts response: {0}")]
    Parse(#[from] serde_json::Error),

    /// 404 from the API
    #[error("404 Not Found: {path}: {message}")]
    NotFound { path: String, message: String },

    /// 401 or 403 from the API
    #[error("{status} Error: {message}")]
    Unauthorized { status: u16, message: String },

    /// 429 from the API
    #[error("429 Error: {0}")]
    RateLimited(String),

    /// 500, 502, 503 or 504 from the API
    #[error("{status} Server Error: {message}")]
    Server { status: u16, message: String },

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// Transient failures persisted through every attempt
    #[error("Maximum retry attempts reached ({attempts}): {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },

    /// The global tracing subscriber could not be installed
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl SoundchartsError {
    /// Classify a non-success response
    pub(crate) fn from_status(status: u16, path: &str, message: String) -> Self {
        match status {
            404 => Self::NotFound {
                path: path.to_string(),
                message,
            },
            401 | 403 => Self::Unauthorized { status, message },
            429 => Self::RateLimited(message),
            500 | 502 | 503 | 504 => Self::Server { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Unauthorized { status, .. }
            | Self::Server { status, .. }
            | Self::Api { status, .. } => Some(*status),
            Self::RateLimited(_) => Some(429),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Severity this failure is logged at
    ///
    /// A missing resource is a warning; every other failure is an error.
    pub fn severity(&self) -> Level {
        match self {
            Self::NotFound { .. } => Level::WARN,
            _ => Level::ERROR,
        }
    }

    /// Check if this error is transient and the request may be repeated
    ///
    /// Retries on:
    /// - Timeouts and connection failures
    /// - Server errors (500, 502, 503, 504)
    /// - 429 responses caused by the request quota
    ///
    /// Authorization failures and other 429s are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Server { .. } => true,
            Self::RateLimited(message) => is_quota_message(message),
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Whether the caller supplied bad arguments (never downgraded to a log line)
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            Self::MissingCredentials
                | Self::Config(_)
                | Self::InvalidInput(_)
                | Self::Logging(_)
        )
    }
}

pub(crate) fn is_quota_message(message: &str) -> bool {
    message.contains(QUOTA_MESSAGE)
}

/// Result type for Soundcharts operations
pub type SoundchartsResult<T> = Result<T, SoundchartsError>;
