use crate::config::ClientConfig;
use crate::Result;

use super::builder::DuckMailClientBuilder;
use super::session::{SessionGuard, SessionManager};

/// Client for the DuckDuckGo Email Protection signup API.
///
/// Calls require an open session. Prefer [`DuckMailClient::session`], which
/// closes the session when the returned guard goes out of scope; `open` and
/// `close` are available for callers managing the lifecycle themselves.
pub struct DuckMailClient {
    pub(crate) config: ClientConfig,
    pub(crate) session: SessionManager,
}

impl DuckMailClient {
    /// Client with default configuration. No session is opened yet.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            session: SessionManager::new(),
        }
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: SessionManager::new(),
        })
    }

    pub fn builder() -> DuckMailClientBuilder {
        DuckMailClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    pub fn open(&mut self) -> Result<()> {
        self.session.open(&self.config)
    }

    /// Release the session. Idempotent.
    pub fn close(&mut self) {
        self.session.close();
    }

    /// Open a session scoped to the returned guard.
    pub fn session(&mut self) -> Result<SessionGuard<'_>> {
        self.open()?;
        Ok(SessionGuard::new(self))
    }
}

impl Default for DuckMailClient {
    fn default() -> Self {
        Self::new()
    }
}
