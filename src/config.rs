//! Client configuration.
//!
//! All fields are optional with defaults. Values can be overridden from the
//! environment via [`ClientConfig::from_env`]:
//!
//! - `DUCKMAIL_TIMEOUT_SECS` (default 30.0)
//! - `DUCKMAIL_MAX_RETRIES` (default 3)
//! - `DUCKMAIL_BASE_URL` (default `https://quack.duckduckgo.com/api`)

use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://quack.duckduckgo.com/api";
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Tunable parameters for every call made by one client instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Per-request timeout in seconds.
    pub timeout: f64,
    /// Reserved. No call path retries; the value is carried but never consulted.
    pub max_retries: u32,
    /// Absolute API root; the signup endpoint is `{base_url}/auth/signup`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout_secs(mut self, secs: f64) -> Self {
        self.timeout = secs;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout.as_secs_f64();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Defaults overridden by `DUCKMAIL_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable lookup.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(timeout) = lookup("DUCKMAIL_TIMEOUT_SECS").and_then(|s| s.trim().parse::<f64>().ok()) {
            cfg.timeout = timeout;
        }
        if let Some(retries) = lookup("DUCKMAIL_MAX_RETRIES").and_then(|s| s.trim().parse::<u32>().ok()) {
            cfg.max_retries = retries;
        }
        if let Some(base_url) = lookup("DUCKMAIL_BASE_URL") {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                cfg.base_url = base_url.to_string();
            }
        }
        cfg
    }

    /// Timeout as a [`Duration`].
    ///
    /// Fails unless the timeout is a positive number of seconds that fits in a
    /// [`Duration`].
    pub fn timeout_duration(&self) -> Result<Duration> {
        match Duration::try_from_secs_f64(self.timeout) {
            Ok(timeout) if !timeout.is_zero() => Ok(timeout),
            _ => Err(Error::configuration_with_context(
                "timeout must be a positive number of seconds",
                ErrorContext::new()
                    .with_field_path("config.timeout")
                    .with_details(format!("got {}", self.timeout))
                    .with_source("client_config"),
            )),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.timeout_duration()?;

        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("base_url is not an absolute URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("client_config"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("unsupported base_url scheme: {}", url.scheme()),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(self.base_url.clone())
                    .with_source("client_config"),
            ));
        }
        Ok(())
    }
}
