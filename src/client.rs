/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the Salt NetAPI rest_cherrypy module
//!
//! This module provides a client that handles:
//! - Login and logout against the configured eauth backend
//! - Attaching the session token to every request
//! - Building requests and decoding responses
//!
//! # Example
//! ```ignore
//! use salt_client::prelude::*;
//!
//! let client = Client::new("http://master:8000", "admin", "password", "pam", false)?;
//! client.login().await?;
//!
//! let minion = client.minion("minion1").await?;
//!
//! client.logout().await?;
//! ```

use crate::application::config::Config;
use crate::auth::Auth;
use crate::constants::{LOGIN_ENDPOINT, LOGOUT_ENDPOINT, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::SessionToken;
use crate::model::http::{ResponseInfo, ResponseTarget, build_request, execute_request};
use crate::model::requests::{LoginRequest, Lowstate};
use crate::model::responses::SaltResponse;
use reqwest::{Client as HttpClient, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::AsyncWrite;
use tracing::{debug, info, warn};

/// Client for the Salt NetAPI rest_cherrypy module
///
/// The configuration is fixed at construction. The session token starts
/// empty and is managed through [`Client::login`] and [`Client::logout`].
/// Cloning is cheap and clones share the session token.
#[derive(Clone)]
pub struct Client {
    auth: Auth,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `address` - URL of the rest_cherrypy instance (e.g. `https://salt-master:8000`)
    /// * `username` - Username known to the eauth backend
    /// * `password` - Password for the user
    /// * `eauth` - External authentication backend (e.g. `pam`)
    /// * `skip_verify` - Accept invalid TLS certificates, for self-signed deployments
    ///
    /// # Returns
    /// * `Ok(Client)` - Unauthenticated client
    /// * `Err(AppError)` - If the HTTP client cannot be created
    pub fn new(
        address: &str,
        username: &str,
        password: &str,
        eauth: &str,
        skip_verify: bool,
    ) -> Result<Self, AppError> {
        Self::from_config(Config::with_credentials(
            address,
            username,
            password,
            eauth,
            skip_verify,
        ))
    }

    /// Creates a new client from a configuration
    ///
    /// # Arguments
    /// * `config` - Credentials and REST API settings
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let mut builder = HttpClient::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(config.rest_api.skip_verify);

        if let Some(timeout) = config.rest_api.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        if config.rest_api.skip_verify {
            warn!("TLS certificate verification disabled for {}", config.rest_api.base_url);
        }

        Ok(Self {
            auth: Auth::new(),
            http_client: builder.build()?,
            config: Arc::new(config),
        })
    }

    /// Creates a new client from the environment, see [`Config::new`]
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(Config::new())
    }

    /// Base address of the rest_cherrypy instance
    pub fn address(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Gets the client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the session holder
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Returns the current session token, empty if unauthenticated
    pub async fn token(&self) -> String {
        self.auth.token().await
    }

    /// Replaces the session token with one obtained elsewhere
    pub async fn set_token(&self, token: &str) {
        self.auth.set_token(token).await;
    }

    /// Clears the session token without contacting the server
    pub async fn clear_token(&self) {
        self.auth.clear().await;
    }

    /// Checks whether a session token is present
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    /// Builds a request against `{address}/{endpoint}`
    ///
    /// The current session token, if any, is attached as `X-Auth-Token`.
    /// Use [`Request::timeout_mut`] on the result to bound a single call.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `endpoint` - Path without a leading slash (e.g. `minions/id1`)
    /// * `body` - Optional request body, serialized as JSON
    pub async fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Request, AppError> {
        let token = self.auth.token().await;
        build_request(
            &self.http_client,
            &self.config.rest_api.base_url,
            &token,
            method,
            endpoint,
            body,
        )
    }

    /// Executes a request, sending the body of a successful response to `target`
    ///
    /// # Returns
    /// * `Ok(ResponseInfo)` - Status, headers and URL of the response
    /// * `Err(AppError)` - [`AppError::Request`] for non-2xx responses, or the
    ///   underlying transport, decode or sink error
    pub async fn do_request<T: DeserializeOwned>(
        &self,
        request: Request,
        target: Option<ResponseTarget<'_, T>>,
    ) -> Result<ResponseInfo, AppError> {
        execute_request(&self.http_client, request, target).await
    }

    /// Executes a request and discards the response body
    pub async fn execute(&self, request: Request) -> Result<ResponseInfo, AppError> {
        self.do_request::<()>(request, None).await
    }

    /// Executes a request and decodes the JSON response into `dest`
    ///
    /// An empty response body leaves `dest` untouched.
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: Request,
        dest: &mut T,
    ) -> Result<ResponseInfo, AppError> {
        self.do_request(request, Some(ResponseTarget::Json(dest)))
            .await
    }

    /// Executes a request and copies the response body verbatim into `writer`
    pub async fn execute_to_writer<W: AsyncWrite + Unpin + Send>(
        &self,
        request: Request,
        writer: &mut W,
    ) -> Result<ResponseInfo, AppError> {
        self.do_request::<()>(request, Some(ResponseTarget::Writer(writer)))
            .await
    }

    /// Makes a GET request and decodes the response
    ///
    /// # Example
    /// ```ignore
    /// let stats: serde_json::Value = client.get("stats").await?;
    /// ```
    pub async fn get<T: DeserializeOwned + Default>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    /// Makes a POST request with a JSON body and decodes the response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    /// Makes a request and decodes the response into a fresh `T`
    ///
    /// An empty response body yields `T::default()`.
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let request = self.new_request(method, endpoint, body).await?;
        let mut value = T::default();
        self.execute_json(request, &mut value).await?;
        Ok(value)
    }

    /// Logs in with the configured credentials and stores the session token
    ///
    /// # Returns
    /// * `Ok(SessionToken)` - The token and its metadata
    /// * `Err(AppError)` - [`AppError::MissingToken`] if the server answered
    ///   without a token, or any request error
    pub async fn login(&self) -> Result<SessionToken, AppError> {
        info!(
            "Logging in to {} as {} ({})",
            self.address(),
            self.config.credentials.username,
            self.config.credentials.eauth
        );

        let body = LoginRequest::from(&self.config.credentials);
        let response: SaltResponse<SessionToken> = self.post(LOGIN_ENDPOINT, &body).await?;

        let session = response
            .into_first()
            .filter(|s| !s.token.is_empty())
            .ok_or(AppError::MissingToken)?;

        debug!("Session token expires at {:?}", session.expires_at());
        self.auth.store(session.clone()).await;

        info!("✓ Login successful, user: {}", session.user);
        Ok(session)
    }

    /// Logs in only if no valid session token is held
    pub async fn ensure_login(&self) -> Result<(), AppError> {
        if self.auth.needs_login().await {
            self.login().await?;
        }
        Ok(())
    }

    /// Invalidates the session on the server and clears the local token
    ///
    /// The local token is kept if the server rejects the logout.
    pub async fn logout(&self) -> Result<(), AppError> {
        info!("Logging out");

        let request = self
            .new_request(Method::POST, LOGOUT_ENDPOINT, None::<&()>)
            .await?;
        self.execute(request).await?;
        self.auth.clear().await;

        info!("✓ Logged out successfully");
        Ok(())
    }

    /// Runs a list of lowstate commands through the root endpoint
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - One result per command, in order
    pub async fn run(&self, commands: &[Lowstate]) -> Result<Vec<Value>, AppError> {
        debug!("Running {} lowstate command(s)", commands.len());
        let response: SaltResponse<Value> = self.post("", commands).await?;
        Ok(response.items)
    }
}
