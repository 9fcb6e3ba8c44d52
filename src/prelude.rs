/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Salt Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ```rust
//! use salt_client::prelude::*;
//!
//! let config = Config::with_credentials("http://master:8000", "admin", "secret", "pam", false);
//! let client = Client::from_config(config).expect("client");
//! assert_eq!(client.address(), "http://master:8000");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Salt API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type and non-2xx response error
pub use crate::error::{AppError, RequestError};

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// The API client
pub use crate::client::Client;

/// Session token holder
pub use crate::auth::Auth;

/// Session token returned by login
pub use crate::model::auth::SessionToken;

// ============================================================================
// REQUEST / RESPONSE HELPERS
// ============================================================================

/// Request building and response decoding
pub use crate::model::http::{ResponseInfo, ResponseTarget, build_request, execute_request};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by [`Client`]
pub use crate::application::interfaces::{job::JobService, key::KeyService, minion::MinionService};

// ============================================================================
// DATA MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{JobRequest, LoginRequest, Lowstate, TargetType};

/// Response models
pub use crate::model::responses::{
    AsyncJob, Job, JobDetails, KeyLists, Minion, SaltResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;
