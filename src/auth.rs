/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session state for the Salt API client
//!
//! The session is a single token string: empty means unauthenticated. It is
//! set after a successful login and cleared on logout. Requests read a
//! snapshot of it when they are built.

use crate::constants::TOKEN_EXPIRY_MARGIN_SECS;
use crate::model::auth::SessionToken;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct SessionState {
    token: String,
    details: Option<SessionToken>,
}

/// Holder of the session token shared by all requests of a client
#[derive(Debug, Clone, Default)]
pub struct Auth {
    state: Arc<RwLock<SessionState>>,
}

impl Auth {
    /// Creates an unauthenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current token, empty if unauthenticated
    pub async fn token(&self) -> String {
        self.state.read().await.token.clone()
    }

    /// Checks whether a token is present
    pub async fn is_authenticated(&self) -> bool {
        !self.state.read().await.token.is_empty()
    }

    /// Returns the details of the token obtained by the last login, if any
    pub async fn session(&self) -> Option<SessionToken> {
        self.state.read().await.details.clone()
    }

    /// Checks whether the stored login token is expired
    ///
    /// Tokens set directly through [`Auth::set_token`] carry no expiry and
    /// are never reported as expired.
    pub async fn needs_login(&self) -> bool {
        let state = self.state.read().await;
        if state.token.is_empty() {
            return true;
        }
        match &state.details {
            Some(details) => details.is_expired(TOKEN_EXPIRY_MARGIN_SECS),
            None => false,
        }
    }

    /// Stores the token returned by a login
    pub async fn store(&self, session: SessionToken) {
        if session.token.is_empty() {
            warn!("Storing an empty session token, client is now unauthenticated");
        }
        let mut state = self.state.write().await;
        state.token = session.token.clone();
        state.details = Some(session);
    }

    /// Replaces the token with one obtained elsewhere
    pub async fn set_token(&self, token: &str) {
        debug!("Session token replaced");
        let mut state = self.state.write().await;
        state.token = token.to_string();
        state.details = None;
    }

    /// Clears the token, making the client unauthenticated
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.token.clear();
        state.details = None;
    }
}
