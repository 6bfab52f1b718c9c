use std::env;
use std::time::Duration;

use crate::error::ClientError;

/// Reference cadence while a table is on screen.
const DEFAULT_TABLE_POLL_MS: u64 = 3000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Connection and cadence settings for one client process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the game service is mounted at, without a trailing slash.
    pub base_url: String,
    pub table_poll_interval: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Defaults with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            table_poll_interval: Duration::from_millis(DEFAULT_TABLE_POLL_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }

    /// Replace the base URL, keeping the configured cadences.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Build from environment variables, falling back to defaults:
    /// `API_BASE_URL`, `TABLE_POLL_INTERVAL_MS`, `REQUEST_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            base_url: normalize_base_url(base_url),
            table_poll_interval: duration_var("TABLE_POLL_INTERVAL_MS", DEFAULT_TABLE_POLL_MS)?,
            request_timeout: duration_var("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
        })
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

/// Read a millisecond duration from the environment with a default.
fn duration_var(name: &'static str, default_ms: u64) -> Result<Duration, ClientError> {
    match env::var(name) {
        Ok(raw) => parse_ms(name, &raw),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

fn parse_ms(name: &'static str, raw: &str) -> Result<Duration, ClientError> {
    let ms: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ClientError::config(format!("{name} must be an integer, got '{raw}'")))?;
    if ms == 0 {
        return Err(ClientError::config(format!("{name} must be positive")));
    }
    Ok(Duration::from_millis(ms))
}
