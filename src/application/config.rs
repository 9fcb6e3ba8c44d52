use crate::constants::{DEFAULT_API_URL, DEFAULT_EAUTH};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials used to obtain a session token from the Salt API
pub struct Credentials {
    /// Username known to the eauth backend
    pub username: String,
    /// Password for the user; never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    /// External authentication backend (e.g. `pam`, `ldap`)
    pub eauth: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the rest_cherrypy endpoint
pub struct RestApiConfig {
    /// Base address of the rest_cherrypy instance (e.g. `https://salt-master:8000`)
    pub base_url: String,
    /// Accept invalid TLS certificates, for self-signed deployments
    pub skip_verify: bool,
    /// Client-wide timeout in seconds. `None` leaves timeouts to the caller
    pub timeout: Option<u64>,
}

impl RestApiConfig {
    /// Returns the configured client-wide timeout as a [`Duration`]
    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Salt API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file is loaded first if present. Recognised variables are
    /// `SALT_API_URL`, `SALT_USERNAME`, `SALT_PASSWORD`, `SALT_EAUTH`,
    /// `SALT_SKIP_VERIFY` and `SALT_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("SALT_USERNAME", String::from("default_username"));
        let password = get_env_or_default("SALT_PASSWORD", String::from("default_password"));

        if username == "default_username" {
            error!("SALT_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("SALT_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                eauth: get_env_or_default("SALT_EAUTH", String::from(DEFAULT_EAUTH)),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("SALT_API_URL", String::from(DEFAULT_API_URL)),
                skip_verify: get_env_or_default("SALT_SKIP_VERIFY", false),
                timeout: get_env_or_none("SALT_REST_TIMEOUT"),
            },
        }
    }

    /// Creates a configuration from explicit values, ignoring the environment
    ///
    /// # Arguments
    /// * `address` - URL of the rest_cherrypy instance (e.g. `https://salt-master:8000`)
    /// * `username` - Username known to the eauth backend
    /// * `password` - Password for the user
    /// * `eauth` - External authentication backend
    /// * `skip_verify` - Accept invalid TLS certificates
    pub fn with_credentials(
        address: &str,
        username: &str,
        password: &str,
        eauth: &str,
        skip_verify: bool,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
                eauth: eauth.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: address.to_string(),
                skip_verify,
                timeout: None,
            },
        }
    }
}
