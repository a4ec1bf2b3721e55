//! Signup outcomes.

use serde::{Deserialize, Serialize};

/// Error codes the signup endpoint is known to return.
///
/// The set is open; unknown codes are passed through unchanged.
pub mod error_codes {
    pub const UNAVAILABLE_USERNAME: &str = "unavailable_username";
    pub const FAILED_MX_CHECK: &str = "failed_mx_check";
    pub const DUCK_ADDRESS_NOT_ALLOWED: &str = "duck_address_not_allowed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// Successful signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Expected to be `"valid"`.
    pub status: String,
    /// Confirmed username.
    pub user: String,
}

/// Domain rejection returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupError {
    pub error: String,
}

impl SignupError {
    pub fn is_unavailable_username(&self) -> bool {
        self.error == error_codes::UNAVAILABLE_USERNAME
    }
}

/// Result of a completed signup call.
///
/// A rejection means the call itself succeeded and the server said no.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SignupOutcome {
    Accepted(SignupResponse),
    Rejected(SignupError),
}

impl SignupOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SignupOutcome::Accepted(_))
    }

    /// Confirmed username, if accepted.
    pub fn user(&self) -> Option<&str> {
        match self {
            SignupOutcome::Accepted(resp) => Some(&resp.user),
            SignupOutcome::Rejected(_) => None,
        }
    }

    /// API error code, if rejected.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            SignupOutcome::Accepted(_) => None,
            SignupOutcome::Rejected(rej) => Some(&rej.error),
        }
    }

    pub fn into_result(self) -> std::result::Result<SignupResponse, SignupError> {
        match self {
            SignupOutcome::Accepted(resp) => Ok(resp),
            SignupOutcome::Rejected(rej) => Err(rej),
        }
    }
}
