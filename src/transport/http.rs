use crate::config::ClientConfig;
use crate::{Error, ErrorContext, Result};
use tracing::debug;

use super::TransportError;

/// Status code and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Pooled HTTP session bound to one API root.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Build the pooled client. `config` is validated first, so an invalid
    /// config is an [`crate::Error::Configuration`] rather than a panic.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration()?)
            .user_agent(concat!("duckmail/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to create HTTP client: {}", e),
                    ErrorContext::new().with_source("http_transport"),
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a url-encoded form and read the whole body.
    ///
    /// Any HTTP status is a successful exchange here; only failures to send or
    /// to read the body are errors.
    pub async fn post_form(&self, path: &str, fields: &[(&'static str, String)]) -> Result<RawResponse> {
        let url = self.endpoint(path);
        debug!(url = url.as_str(), fields = fields.len(), "duckmail POST form");

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json")
            .form(fields)
            .send()
            .await
            .map_err(|e| Error::Connection(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Connection(TransportError::Http(e)))?;

        Ok(RawResponse { status, body })
    }
}
