/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types returned by the Salt API client
//!
//! Every fallible operation returns [`AppError`]. A response outside the
//! `2xx` range is reported as [`AppError::Request`], carrying the raw
//! [`RequestError`] so callers can inspect the status and body. Transport,
//! serialization and decode failures are passed through untouched.

use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// A non-2xx HTTP response returned by the Salt API
#[derive(Clone, PartialEq, Eq)]
pub struct RequestError {
    /// Numeric HTTP status code (e.g. `500`)
    pub status_code: u16,
    /// Status line text (e.g. `"500 Internal Server Error"`)
    pub status: String,
    /// Raw response body, possibly partial or empty if reading it failed
    pub body: Vec<u8>,
}

impl RequestError {
    /// Creates a request error from a response status and the body read so far
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status_code: status.as_u16(),
            status: status.to_string(),
            body,
        }
    }

    /// Returns the body as UTF-8 text, replacing invalid sequences
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns the status as a typed [`StatusCode`], if it is a valid code
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP request failed: {}", self.status)
    }
}

impl fmt::Debug for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestError")
            .field("status_code", &self.status_code)
            .field("status", &self.status)
            .field("body", &self.body_text())
            .finish()
    }
}

impl std::error::Error for RequestError {}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The server answered with a status outside `200..=299`
    #[error(transparent)]
    Request(#[from] RequestError),
    /// Building or sending the request failed at the transport level
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// Request body serialization or response decoding failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Writing the response body into a caller-supplied sink failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Login succeeded but the response carried no session token
    #[error("login response did not contain a session token")]
    MissingToken,
    /// Caller-supplied input was rejected before any request was made
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A job was submitted but the target matched no minions, so no jid was issued
    #[error("no minions matched target {0}")]
    NoMinionsMatched(String),
}

impl AppError {
    /// Returns the wrapped [`RequestError`] if this is a non-2xx response
    #[must_use]
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            AppError::Request(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code associated with this error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Request(e) => Some(e.status_code),
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
