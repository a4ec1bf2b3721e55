//! 注册操作：校验输入、发送表单请求、分类响应。
//!
//! Signup operation (single attempt, never retried).

use std::time::Instant;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::types::{SignupOptions, SignupOutcome, SignupRequest};
use crate::{Error, Result};

use super::core::DuckMailClient;
use super::error_classification::classify_response;

pub(crate) const SIGNUP_PATH: &str = "/auth/signup";

impl DuckMailClient {
    /// Register `user` with the forwarding address `email`.
    ///
    /// Checks, in order and before any network access: an open session
    /// ([`Error::NotInitialized`]), then the inputs ([`Error::Validation`]).
    ///
    /// A server-side rejection such as a taken username is returned as
    /// `Ok(SignupOutcome::Rejected(_))`. Transport failures (including the
    /// configured timeout) are [`Error::Connection`], 5xx and unstructured 4xx
    /// responses are [`Error::Api`], anything else is [`Error::Client`].
    pub async fn signup(&self, user: &str, email: &str, options: SignupOptions) -> Result<SignupOutcome> {
        self.session.handle()?;

        info!(user, "duckmail attempting signup");
        info!(
            user,
            email,
            disable_secure_reply = options.disable_secure_reply,
            dry_run = options.dry_run,
            "duckmail signup request parameters"
        );

        let request = SignupRequest::new(user, email, options).map_err(|e| {
            error!(user, error = %e, "duckmail signup validation error");
            e
        })?;

        self.signup_request(&request).await
    }

    /// Send an already validated request.
    pub async fn signup_request(&self, request: &SignupRequest) -> Result<SignupOutcome> {
        let transport = self.session.handle()?;
        let client_request_id = Uuid::new_v4().to_string();
        let user = request.user();

        let start = Instant::now();
        let raw = transport
            .post_form(SIGNUP_PATH, &request.form_fields())
            .await
            .map_err(|e| {
                error!(
                    client_request_id = client_request_id.as_str(),
                    user,
                    timeout = matches!(&e, Error::Connection(t) if t.is_timeout()),
                    error = %e,
                    "duckmail signup request error"
                );
                e
            })?;

        info!(
            client_request_id = client_request_id.as_str(),
            http_status = raw.status,
            duration_ms = start.elapsed().as_millis() as u64,
            "duckmail response status"
        );
        info!(
            client_request_id = client_request_id.as_str(),
            body = raw.body.as_str(),
            "duckmail response body"
        );

        match classify_response(raw.status, &raw.body) {
            Ok(outcome) => {
                match &outcome {
                    SignupOutcome::Accepted(resp) => info!(
                        client_request_id = client_request_id.as_str(),
                        user,
                        status = resp.status.as_str(),
                        "duckmail signup successful"
                    ),
                    SignupOutcome::Rejected(rej) => warn!(
                        client_request_id = client_request_id.as_str(),
                        user,
                        error_code = rej.error.as_str(),
                        "duckmail signup rejected"
                    ),
                }
                Ok(outcome)
            }
            Err(e) => {
                error!(
                    client_request_id = client_request_id.as_str(),
                    user,
                    http_status = raw.status,
                    error = %e,
                    "duckmail signup failed"
                );
                Err(e)
            }
        }
    }
}
