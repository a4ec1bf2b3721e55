//! Response classification for the signup endpoint.
//!
//! Runs after the transport returned a status and a body:
//! - status >= 500, or status >= 400 without an `error` key: API error
//! - `error` key present: domain rejection
//! - otherwise: accepted signup
//!
//! A body that is not JSON counts as having no `error` key. Anything that still
//! cannot be turned into an outcome becomes a generic client error.

use serde_json::Value;

use crate::types::{SignupError, SignupOutcome, SignupResponse};
use crate::{Error, ErrorContext, Result};

pub(crate) const UNKNOWN_API_ERROR: &str = "Unknown API error";

fn unexpected(detail: impl std::fmt::Display) -> Error {
    Error::client_with_context(
        format!("Signup failed: {}", detail),
        ErrorContext::new().with_source("signup"),
    )
}

fn error_code(body: &Value) -> Option<String> {
    body.get("error").map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

pub(crate) fn is_api_failure(status: u16, has_error_code: bool) -> bool {
    status >= 500 || (status >= 400 && !has_error_code)
}

pub(crate) fn classify_response(status: u16, body: &str) -> Result<SignupOutcome> {
    let parsed = serde_json::from_str::<Value>(body);
    let code = parsed.as_ref().ok().and_then(error_code);

    if is_api_failure(status, code.is_some()) {
        return Err(Error::api(
            Some(status),
            code.unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
        ));
    }

    let json = parsed.map_err(|e| unexpected(format!("invalid JSON response: {}", e)))?;
    if code.is_some() {
        let rejection: SignupError = serde_json::from_value(json).map_err(unexpected)?;
        return Ok(SignupOutcome::Rejected(rejection));
    }

    let response: SignupResponse = serde_json::from_value(json).map_err(unexpected)?;
    Ok(SignupOutcome::Accepted(response))
}
