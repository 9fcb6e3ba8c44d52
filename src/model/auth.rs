/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session token issued by `POST /login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionToken {
    /// Opaque token sent back in the `X-Auth-Token` header
    pub token: String,
    /// Creation time, seconds since the Unix epoch
    #[serde(default)]
    pub start: f64,
    /// Expiry time, seconds since the Unix epoch
    #[serde(default)]
    pub expire: f64,
    /// Authenticated user name
    #[serde(default)]
    pub user: String,
    /// eauth backend that validated the credentials
    #[serde(default)]
    pub eauth: String,
    /// Permissions granted to the user by the master's ACL
    #[serde(default)]
    pub perms: Vec<Value>,
}

impl SessionToken {
    /// Returns the creation time, if representable
    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.start)
    }

    /// Returns the expiry time, if representable
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_datetime(self.expire)
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    ///
    /// A token with no usable expiry is treated as expired.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: i64) -> bool {
        match self.expires_at() {
            Some(expiry) => expiry - Duration::seconds(margin_seconds) <= Utc::now(),
            None => true,
        }
    }
}

fn epoch_to_datetime(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() || secs <= 0.0 {
        return None;
    }
    let whole = secs.trunc() as i64;
    let nanos = (secs.fract() * 1_000_000_000.0) as u32;
    DateTime::from_timestamp(whole, nanos)
}
