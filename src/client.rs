//! Signup client.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod error_classification;
pub mod session;
mod signup;

pub use builder::DuckMailClientBuilder;
pub use self::core::DuckMailClient;
pub use session::{SessionGuard, SessionManager};
