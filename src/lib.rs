//! Client library for the Madrasati school directory API.
//!
//! The backend uses Laravel Sanctum session auth: state-changing calls must
//! be preceded by a CSRF-cookie fetch, and an optional bearer token can ride
//! along on every request. [`Transport`] owns the HTTP plumbing and
//! [`AuthClient`] sequences the auth operations on top of it.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod token;
pub mod transport;
pub mod types;

pub use auth::AuthClient;
pub use config::ApiConfig;
pub use error::Error;
pub use token::{MemoryTokenStore, TokenStore};
pub use transport::Transport;

/// User agent sent with every outbound request.
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
