//! Soundcharts API client implementation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use soundcharts_shared_config::SoundchartsConfig;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn, Level};

use crate::error::{is_quota_message, SoundchartsError, SoundchartsResult};
use crate::pagination::empty_object;
use crate::params::Query;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum response body size written to debug logs
const MAX_LOGGED_BODY_SIZE: usize = 1000;

/// Soundcharts API client
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct SoundchartsClient {
    http_client: Client,
    config: SoundchartsConfig,
    max_retries: u32,
    retry_delay: Duration,
    rate_limit_delay: Duration,
    exception_level: LevelFilter,
}

impl fmt::Debug for SoundchartsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundchartsClient")
            .field("base_url", &self.config.base_url)
            .field("app_id", &self.config.app_id)
            .field("api_key", &"[REDACTED]")
            .field("max_retries", &self.max_retries)
            .field("exception_level", &self.exception_level)
            .finish()
    }
}

impl SoundchartsClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    /// - `SoundchartsError::MissingCredentials` if the app id or API key is empty
    /// - `SoundchartsError::InvalidInput` if a credential is not a valid header value
    pub fn new(config: &SoundchartsConfig) -> SoundchartsResult<Self> {
        if config.app_id.trim().is_empty() || config.api_key.trim().is_empty() {
            return Err(SoundchartsError::MissingCredentials);
        }

        let http_client = Client::builder()
            .default_headers(Self::credential_headers(config)?)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(concat!("soundcharts-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
            max_retries: config.max_retries,
            retry_delay: Duration::from_secs(config.retry_delay_secs),
            rate_limit_delay: Duration::from_secs(config.rate_limit_delay_secs),
            exception_level: config.logging.exception_level,
        })
    }

    /// Create a client from `SOUNDCHARTS_*` environment variables
    pub fn from_env() -> SoundchartsResult<Self> {
        let config = SoundchartsConfig::from_env()?;
        Self::new(&config)
    }

    /// Shorthand for a production client with default settings
    pub fn with_credentials(
        app_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> SoundchartsResult<Self> {
        Self::new(&SoundchartsConfig::new(app_id, api_key))
    }

    /// Set retry configuration
    ///
    /// `attempts` is the total number of tries per request; `delay` is
    /// the pause after a transient server failure.
    pub fn with_retry_config(mut self, attempts: u32, delay: Duration) -> Self {
        self.max_retries = attempts;
        self.retry_delay = delay;
        self
    }

    /// Set the pause after the API reports the request quota was hit
    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }

    /// Set the minimum severity of failures returned as errors
    pub fn with_exception_level(mut self, level: LevelFilter) -> Self {
        self.exception_level = level;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &SoundchartsConfig {
        &self.config
    }

    fn credential_headers(config: &SoundchartsConfig) -> SoundchartsResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in config.api_headers() {
            let mut value = HeaderValue::from_str(value.trim()).map_err(|_| {
                SoundchartsError::InvalidInput(format!("{} is not a valid header value", name))
            })?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Execute an operation with retry logic for transient failures
    async fn with_retry<T, F, Fut>(&self, operation: F) -> SoundchartsResult<T>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = SoundchartsResult<T>>,
    {
        let attempts = self.max_retries.max(1);
        let mut last_error = None;

        for attempt in 1..=attempts {
            match operation(attempt).await {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    if attempt < attempts {
                        let delay = self.delay_after(&e);
                        warn!(
                            attempt,
                            max_attempts = attempts,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "Soundcharts request failed, retrying"
                        );
                        tokio::time::sleep(delay).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(SoundchartsError::RetriesExhausted {
            attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string()),
        })
    }

    fn delay_after(&self, error: &SoundchartsError) -> Duration {
        match error {
            SoundchartsError::RateLimited(message) if is_quota_message(message) => {
                self.rate_limit_delay
            }
            _ => self.retry_delay,
        }
    }

    /// Send one request and classify the response
    async fn send_once(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        attempt: u32,
    ) -> SoundchartsResult<Value> {
        let url = self.config.api_url(path);
        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .query(query.pairs());
        if let Some(body) = body {
            request = request.json(body);
        }

        info!(
            attempt,
            max_attempts = self.max_retries.max(1),
            method = %method,
            url = %url,
            "Sending Soundcharts request"
        );
        debug!(query = ?query.pairs(), body = ?body, "Request parameters");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                SoundchartsError::Timeout
            } else {
                SoundchartsError::Http(e)
            }
        })?;

        let status = response.status();
        let text = response.text().await?;
        debug!(
            status = status.as_u16(),
            body = %truncate_for_log(&text),
            "Received Soundcharts response"
        );

        if status == StatusCode::OK {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        Err(SoundchartsError::from_status(
            status.as_u16(),
            path,
            extract_error_message(&text),
        ))
    }

    /// Make an API request, applying retries and the exception threshold
    ///
    /// Returns `Ok(None)` when the request failed with a severity below the
    /// configured exception level; the failure is logged either way.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> SoundchartsResult<Option<Value>> {
        let result = self
            .with_retry(|attempt| self.send_once(method.clone(), path, query, body, attempt))
            .await;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) => self.surface(e),
        }
    }

    /// Log a failure and decide whether the caller sees it
    fn surface<T>(&self, error: SoundchartsError) -> SoundchartsResult<Option<T>> {
        if error.is_client_side() {
            return Err(error);
        }

        let severity = error.severity();
        if severity == Level::WARN {
            warn!(status = ?error.status(), error = %error, "Soundcharts request failed");
        } else {
            error!(status = ?error.status(), error = %error, "Soundcharts request failed");
        }

        if severity <= self.exception_level {
            Err(error)
        } else {
            Ok(None)
        }
    }

    /// GET a single resource; suppressed failures yield `{}`
    pub(crate) async fn get(&self, path: &str, query: Query) -> SoundchartsResult<Value> {
        let value = self.execute(Method::GET, path, &query, None).await?;
        Ok(value.filter(|v| !v.is_null()).unwrap_or_else(empty_object))
    }

    /// POST a JSON payload; suppressed failures yield `{}`
    pub(crate) async fn post(&self, path: &str, body: Value) -> SoundchartsResult<Value> {
        let value = self
            .execute(Method::POST, path, &Query::new(), Some(&body))
            .await?;
        Ok(value.filter(|v| !v.is_null()).unwrap_or_else(empty_object))
    }

    /// DELETE with a JSON payload; suppressed failures yield `{}`
    pub(crate) async fn delete(&self, path: &str, body: Value) -> SoundchartsResult<Value> {
        let value = self
            .execute(Method::DELETE, path, &Query::new(), Some(&body))
            .await?;
        Ok(value.filter(|v| !v.is_null()).unwrap_or_else(empty_object))
    }
}

/// Pull a human-readable message out of an error body
///
/// Tries `errors[0].message`, then `message`, then falls back to the raw text.
fn extract_error_message(text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<Value>(text) {
        let message = body
            .pointer("/errors/0/message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .or_else(|| body.get("message").and_then(Value::as_str))
            .filter(|m| !m.is_empty());
        if let Some(message) = message {
            return message.to_string();
        }
    }
    text.to_string()
}

/// Truncate a body for logging without splitting a UTF-8 character
fn truncate_for_log(body: &str) -> String {
    if body.len() <= MAX_LOGGED_BODY_SIZE {
        return body.to_string();
    }

    let truncate_at = body
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|i| *i <= MAX_LOGGED_BODY_SIZE)
        .last()
        .unwrap_or(0);

    format!("{}... (truncated)", &body[..truncate_at])
}
