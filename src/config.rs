//! Client configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

pub const API_URL_VAR: &str = "COPYDESK_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "COPYDESK_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "COPYDESK_CONNECT_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{0}' (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("invalid value for {var}: '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

/// Optional HTTP timeouts. `None` means wait indefinitely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub request: Option<Duration>,
    pub connect: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `COPYDESK_API_URL`: backend base URL (default `http://127.0.0.1:8000`)
    /// - `COPYDESK_REQUEST_TIMEOUT_SECS`: whole-request timeout, unset by default
    /// - `COPYDESK_CONNECT_TIMEOUT_SECS`: connect timeout, unset by default
    ///
    /// # Errors
    ///
    /// Returns an error if the URL has no http(s) scheme or a timeout is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        let timeouts = Timeouts {
            request: env_parse_secs(REQUEST_TIMEOUT_VAR)?,
            connect: env_parse_secs(CONNECT_TIMEOUT_VAR)?,
        };
        Ok(Self { api_url: normalize_base_url(&raw_url)?, timeouts })
    }

    /// Replace the base URL, e.g. from a CLI flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL has no http(s) scheme.
    pub fn with_api_url(mut self, raw_url: &str) -> Result<Self, ConfigError> {
        self.api_url = normalize_base_url(raw_url)?;
        Ok(self)
    }
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for anything else.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

fn env_parse_secs(var: &'static str) -> Result<Option<Duration>, ConfigError> {
    let Ok(value) = std::env::var(var) else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<u64>()
        .map(|secs| Some(Duration::from_secs(secs)))
        .map_err(|_| ConfigError::InvalidNumber { var, value: value.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
