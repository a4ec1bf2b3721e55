//! Signup request and its input validation.

use crate::{Error, ErrorContext, Result};

/// Optional flags for a signup call. Both default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupOptions {
    pub disable_secure_reply: bool,
    pub dry_run: bool,
}

impl SignupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disable_secure_reply(mut self, enable: bool) -> Self {
        self.disable_secure_reply = enable;
        self
    }

    /// Ask the server to validate without registering the address.
    pub fn dry_run(mut self, enable: bool) -> Self {
        self.dry_run = enable;
        self
    }
}

/// Validated input to one signup attempt.
///
/// Only obtainable through [`SignupRequest::new`], so holding one means the
/// input passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    user: String,
    email: String,
    options: SignupOptions,
}

impl SignupRequest {
    /// Validate `user` and `email` in order: non-empty user, non-empty email,
    /// then an email containing both `@` and `.`.
    ///
    /// The email check is a sanity check, not RFC 5322 parsing.
    pub fn new(user: &str, email: &str, options: SignupOptions) -> Result<Self> {
        if user.is_empty() {
            return Err(Error::validation_with_context(
                "Username is required and must be a string",
                ErrorContext::new().with_field_path("user").with_source("signup"),
            ));
        }
        if email.is_empty() {
            return Err(Error::validation_with_context(
                "Email is required and must be a string",
                ErrorContext::new().with_field_path("email").with_source("signup"),
            ));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(Error::validation_with_context(
                "Invalid email format",
                ErrorContext::new()
                    .with_field_path("email")
                    .with_details(email.to_string())
                    .with_source("signup"),
            ));
        }

        Ok(Self {
            user: user.to_string(),
            email: email.to_string(),
            options,
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn options(&self) -> SignupOptions {
        self.options
    }

    /// Wire form fields. Flags are sent as `"1"` when set and omitted otherwise.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("user", self.user.clone()), ("email", self.email.clone())];
        if self.options.disable_secure_reply {
            fields.push(("disable_secure_reply", "1".to_string()));
        }
        if self.options.dry_run {
            fields.push(("dry_run", "1".to_string()));
        }
        fields
    }
}
