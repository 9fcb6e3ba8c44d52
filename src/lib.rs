/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Salt Client
//!
//! Client library for the Salt NetAPI
//! [`rest_cherrypy`](https://docs.saltproject.io/en/latest/ref/netapi/all/salt.netapi.rest_cherrypy.html)
//! module.
//!
//! The client logs in once against an eauth backend, keeps the returned
//! session token and attaches it as `X-Auth-Token` to every later request.
//! Responses outside the `2xx` range surface as [`error::RequestError`];
//! successful responses are decoded as JSON or copied into a byte sink.
//!
//! ## Usage
//!
//! ```ignore
//! use salt_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new("https://master:8000", "admin", "password", "pam", false)?;
//!     client.login().await?;
//!
//!     for minion in client.minions().await? {
//!         println!("{} runs {:?}", minion.id, minion.os());
//!     }
//!
//!     client.logout().await
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads `SALT_API_URL`,
//! `SALT_USERNAME`, `SALT_PASSWORD`, `SALT_EAUTH`, `SALT_SKIP_VERIFY` and
//! `SALT_REST_TIMEOUT` from the environment or a `.env` file.

/// Service interfaces and configuration
pub mod application;
/// Session token holder
pub mod auth;
/// The API client
pub mod client;
/// Constants used across the crate
pub mod constants;
/// Error types
pub mod error;
/// Request and response models, and the request/response helpers
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Re-export of the configuration module
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
