use crate::transport::TransportError;
use std::fmt;
use thiserror::Error;

/// Where a validation, configuration or client error came from.
///
/// Renders as ` (field: .., details: .., source: ..)` with unset parts left
/// out, or as nothing when empty, so it can trail an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Offending input or config key, e.g. "email" or "config.base_url"
    pub field_path: Option<String>,
    pub details: Option<String>,
    /// Raising component, e.g. "signup" or "client_config"
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.field_path.is_none() && self.details.is_none() && self.source.is_none()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let parts = [
            ("field", &self.field_path),
            ("details", &self.details),
            ("source", &self.source),
        ];
        f.write_str(" (")?;
        let mut first = true;
        for (label, value) in parts {
            if let Some(value) = value {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", label, value)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// Coarse category of an [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotInitialized,
    Validation,
    Api,
    Connection,
    Client,
    Configuration,
}

/// Failure of a client call.
///
/// A domain rejection from the server (e.g. a taken username) is not an error;
/// it is returned as [`crate::SignupOutcome::Rejected`].
#[derive(Debug, Error)]
pub enum Error {
    /// The operation was invoked without an open session.
    #[error("Client session not initialized")]
    NotInitialized,

    #[error("Validation error: {message}{context}")]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// Server-side failure (5xx) or a 4xx without a structured error code.
    #[error("API error{}: {message}", format_status(.status))]
    Api { status: Option<u16>, message: String },

    #[error("Request failed: {0}")]
    Connection(#[from] TransportError),

    /// Catch-all wrapping any other failure during a call.
    #[error("{message}{context}")]
    Client {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{context}")]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn api(status: Option<u16>, msg: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn client_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Client {
            message: msg.into(),
            context,
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotInitialized => ErrorKind::NotInitialized,
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Api { .. } => ErrorKind::Api,
            Error::Connection(_) => ErrorKind::Connection,
            Error::Client { .. } => ErrorKind::Client,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// HTTP status carried by an API error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. }
            | Error::Client { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}
