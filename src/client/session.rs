//! Scoped HTTP session.

use std::ops::Deref;

use tracing::debug;

use crate::config::ClientConfig;
use crate::transport::HttpTransport;
use crate::{Error, Result};

use super::core::DuckMailClient;

/// Holds at most one open transport session.
///
/// `close` is idempotent and safe on a manager that was never opened. Once
/// closed, [`SessionManager::handle`] fails with [`Error::NotInitialized`].
#[derive(Default)]
pub struct SessionManager {
    transport: Option<HttpTransport>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session. A no-op when one is already open.
    pub fn open(&mut self, config: &ClientConfig) -> Result<()> {
        if self.transport.is_none() {
            let transport = HttpTransport::new(config)?;
            debug!(base_url = transport.base_url(), "duckmail session opened");
            self.transport = Some(transport);
        }
        Ok(())
    }

    pub fn close(&mut self) {
        if let Some(transport) = self.transport.take() {
            debug!(base_url = transport.base_url(), "duckmail session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    pub fn handle(&self) -> Result<&HttpTransport> {
        self.transport.as_ref().ok_or(Error::NotInitialized)
    }
}

/// Open session scope returned by [`DuckMailClient::session`].
///
/// Dereferences to the client. Dropping the guard closes the session, including
/// on early returns and panics.
pub struct SessionGuard<'a> {
    client: &'a mut DuckMailClient,
}

impl<'a> SessionGuard<'a> {
    pub(crate) fn new(client: &'a mut DuckMailClient) -> Self {
        Self { client }
    }
}

impl Deref for SessionGuard<'_> {
    type Target = DuckMailClient;

    fn deref(&self) -> &Self::Target {
        self.client
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.client.close();
    }
}
