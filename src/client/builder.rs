use crate::client::core::DuckMailClient;
use crate::config::ClientConfig;
use crate::Result;
use std::time::Duration;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small: timeout, base URL and the reserved retry count.
pub struct DuckMailClientBuilder {
    config: ClientConfig,
}

impl DuckMailClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Start from `DUCKMAIL_*` environment overrides.
    pub fn from_env() -> Self {
        Self {
            config: ClientConfig::from_env(),
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.config = self.config.with_timeout_secs(secs);
        self
    }

    /// Stored but not consulted; calls are never retried.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config = self.config.with_max_retries(max_retries);
        self
    }

    /// Override the API root (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(base_url);
        self
    }

    /// Validate the configuration and build the client. No session is opened.
    pub fn build(self) -> Result<DuckMailClient> {
        DuckMailClient::with_config(self.config)
    }
}

impl Default for DuckMailClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
