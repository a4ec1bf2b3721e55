//! # Types Module
//!
//! Request and outcome types for the signup endpoint.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SignupOptions`] | Optional flags (`disable_secure_reply`, `dry_run`) |
//! | [`SignupRequest`] | Validated signup input and its wire form fields |
//! | [`SignupResponse`] | Accepted signup (`status`, `user`) |
//! | [`SignupError`] | Domain rejection carrying an API error code |
//! | [`SignupOutcome`] | Tagged union of the two outcomes |
//!
//! ## Example
//!
//! ```rust
//! use duckmail::types::{SignupOptions, SignupRequest};
//!
//! let req = SignupRequest::new(
//!     "alice123",
//!     "alice@example.com",
//!     SignupOptions::new().dry_run(true),
//! )
//! .unwrap();
//! assert_eq!(req.form_fields().len(), 3);
//! ```

pub mod request;
pub mod response;

pub use request::{SignupOptions, SignupRequest};
pub use response::{error_codes, SignupError, SignupOutcome, SignupResponse};
