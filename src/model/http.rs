/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request building and response handling for the Salt API
//!
//! These two functions are the whole protocol layer: [`build_request`] turns
//! a method, endpoint and optional body into a [`Request`] with the canonical
//! headers, and [`execute_request`] sends it, classifies the status and
//! decodes the body into a [`ResponseTarget`].

use crate::constants::{AUTH_TOKEN_HEADER, JSON_CONTENT_TYPE};
use crate::error::{AppError, RequestError};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Method, Request, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Where the body of a successful response goes
pub enum ResponseTarget<'a, T> {
    /// Decode the body as JSON into this value
    ///
    /// An empty body or a JSON `null` leaves the value untouched.
    Json(&'a mut T),
    /// Copy the body verbatim into this sink
    Writer(&'a mut (dyn AsyncWrite + Unpin + Send)),
}

/// Status, headers and final URL of a response whose body has been consumed
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// URL of the request that produced this response
    pub url: Url,
}

impl From<&Response> for ResponseInfo {
    fn from(response: &Response) -> Self {
        Self {
            status: response.status(),
            headers: response.headers().clone(),
            url: response.url().clone(),
        }
    }
}

/// Serializes a request body as JSON followed by a newline
///
/// `serde_json` never HTML-escapes, so `<`, `>` and `&` are written literally.
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, AppError> {
    let mut buf = serde_json::to_vec(body)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Builds a request against the Salt API
///
/// # Arguments
///
/// * `client` - The HTTP client the request will later be executed on
/// * `base_url` - Base address of the rest_cherrypy instance
/// * `token` - Current session token; the `X-Auth-Token` header is only set when non-empty
/// * `method` - HTTP method
/// * `endpoint` - Path appended to `base_url` after a single `/`, without normalization
/// * `body` - Optional request body, serialized as JSON
///
/// # Returns
///
/// * `Ok(Request)` - Request ready to be passed to [`execute_request`]
/// * `Err(AppError)` - If the body cannot be serialized or the URL is malformed
pub fn build_request<B: Serialize + ?Sized>(
    client: &Client,
    base_url: &str,
    token: &str,
    method: Method,
    endpoint: &str,
    body: Option<&B>,
) -> Result<Request, AppError> {
    let url = format!("{base_url}/{endpoint}");
    let payload = body.map(encode_body).transpose()?;

    debug!("Creating request for {}", url);

    let mut request = client
        .request(method, url.as_str())
        .header(ACCEPT, JSON_CONTENT_TYPE)
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

    if !token.is_empty() {
        request = request.header(AUTH_TOKEN_HEADER, token);
    }

    if let Some(payload) = payload {
        request = request.body(payload);
    }

    Ok(request.build()?)
}

/// Executes a request and interprets the response
///
/// Any status outside `200..=299` yields [`AppError::Request`] with the body
/// read so far; nothing is decoded in that case. On success the body goes to
/// `target`, or is drained when `target` is `None`. The response is dropped
/// before this function returns on every path.
///
/// # Arguments
///
/// * `client` - The HTTP client to send the request with
/// * `request` - Request produced by [`build_request`]
/// * `target` - Optional destination for the response body
///
/// # Returns
///
/// * `Ok(ResponseInfo)` - Status, headers and URL of the successful response
/// * `Err(AppError)` - Transport, protocol, decode or sink error
pub async fn execute_request<T: DeserializeOwned>(
    client: &Client,
    request: Request,
    target: Option<ResponseTarget<'_, T>>,
) -> Result<ResponseInfo, AppError> {
    let response = client.execute(request).await?;
    let info = ResponseInfo::from(&response);

    debug!("Received response {} from {}", info.status, info.url);

    if !info.status.is_success() {
        let body = read_body_lenient(response).await;
        return Err(RequestError::new(info.status, body).into());
    }

    match target {
        Some(ResponseTarget::Writer(writer)) => copy_body(response, writer).await?,
        Some(ResponseTarget::Json(dest)) => {
            let bytes = response.bytes().await?;
            if let Some(value) = decode_first::<T>(&bytes)? {
                *dest = value;
            }
        }
        None => {
            response.bytes().await?;
        }
    }

    Ok(info)
}

/// Decodes the first JSON value in `bytes`
///
/// Returns `Ok(None)` when the input is empty, only whitespace, or a JSON
/// `null`.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>, AppError> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<Option<T>>();
    match values.next() {
        Some(value) => Ok(value?),
        None => Ok(None),
    }
}

// Read errors end the read; the partial body is kept.
async fn read_body_lenient(mut response: Response) -> Vec<u8> {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                debug!("Failed to read error response body: {}", e);
                break;
            }
        }
    }
    body
}

async fn copy_body<W: AsyncWrite + Unpin + ?Sized>(
    mut response: Response,
    writer: &mut W,
) -> Result<(), AppError> {
    while let Some(chunk) = response.chunk().await? {
        writer.write_all(&chunk).await?;
    }
    writer.flush().await?;
    Ok(())
}
