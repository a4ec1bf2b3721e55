//! # duckmail
//!
//! Async client for the DuckDuckGo Email Protection signup endpoint
//! (`POST {base_url}/auth/signup`).
//!
//! ## Overview
//!
//! A call validates its input, sends one form-encoded request through an open
//! session, and maps the JSON reply to a [`SignupOutcome`]:
//!
//! - **Accepted**: `{"status": "valid", "user": "<name>"}`
//! - **Rejected**: `{"error": "<code>"}` (e.g. `unavailable_username`)
//!
//! A rejection is a normal result. Failures of the call itself are an [`Error`]:
//! no open session, invalid input, a server failure, or a transport failure.
//! Nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use duckmail::{DuckMailClient, SignupOptions, SignupOutcome};
//!
//! #[tokio::main]
//! async fn main() -> duckmail::Result<()> {
//!     let mut client = DuckMailClient::builder().build()?;
//!     let session = client.session()?;
//!
//!     let outcome = session
//!         .signup("alice123", "alice@example.com", SignupOptions::new().dry_run(true))
//!         .await?;
//!     match outcome {
//!         SignupOutcome::Accepted(resp) => println!("registered {}", resp.user),
//!         SignupOutcome::Rejected(rej) => println!("rejected: {}", rej.error),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, scoped session and the signup operation |
//! | [`config`] | Client configuration and environment overrides |
//! | [`transport`] | HTTP transport over `reqwest` |
//! | [`types`] | Request and outcome types |

pub mod client;
pub mod config;
pub mod transport;
pub mod types;

pub use client::{DuckMailClient, DuckMailClientBuilder, SessionGuard};
pub use config::ClientConfig;
pub use types::{error_codes, SignupError, SignupOptions, SignupOutcome, SignupRequest, SignupResponse};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
