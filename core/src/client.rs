//! Stateless client for the joke API.
//!
//! # Design
//! `ApiRequest` holds only its base URL, a user agent, and a transport. Each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and the shared `parse_response` that turns an `HttpResponse` into an
//! `ApiResult`. The transport sits between the two, so every outcome
//! (transport failure, HTTP error status, undecodable body) is normalized in
//! one place and returned as a value.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Decoded JSON payload on success, normalized failure otherwise.
pub type ApiResult = Result<Value, ApiError>;

/// Synchronous, stateless client for the joke API.
///
/// Safe to share across threads whenever its transport is; no state changes
/// between calls.
#[derive(Debug, Clone)]
pub struct ApiRequest<T = UreqTransport> {
    base_url: String,
    user_agent: String,
    transport: T,
}

impl ApiRequest<UreqTransport> {
    /// Client for the public API with default settings.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }
}

impl Default for ApiRequest<UreqTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ApiRequest<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch a random joke object.
    pub fn get_random(&self) -> ApiResult {
        self.send(self.build_random())
    }

    /// Fetch the array of category names.
    pub fn get_categories(&self) -> ApiResult {
        self.send(self.build_categories())
    }

    /// Fetch a random joke from `category`.
    ///
    /// The category is not checked against `get_categories()`; an unknown one
    /// comes back as whatever HTTP error the server answers with.
    pub fn find_specific(&self, category: &str) -> ApiResult {
        self.send(self.build_find_specific(category))
    }

    pub fn build_random(&self) -> HttpRequest {
        self.build("jokes/random")
    }

    pub fn build_categories(&self) -> HttpRequest {
        self.build("jokes/categories")
    }

    pub fn build_find_specific(&self, category: &str) -> HttpRequest {
        self.build(&format!("jokes/random/{category}"))
    }

    fn build(&self, path: &str) -> HttpRequest {
        HttpRequest {
            url: format!("{}/{path}", self.base_url),
            headers: vec![
                ("accept".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), self.user_agent.clone()),
            ],
        }
    }

    fn send(&self, request: HttpRequest) -> ApiResult {
        debug!(url = %request.url, "sending request");
        let result = match self.transport.get(&request) {
            Ok(response) => parse_response(response, &request.url),
            Err(err) => Err(ApiError::Request(err.0)),
        };
        if let Err(err) = &result {
            warn!(url = %request.url, status_code = ?err.status_code(), error = %err, "request failed");
        }
        result
    }
}

/// Turn a response into the decoded payload or an `ApiError`.
///
/// The status is checked before the body is touched, so a non-2xx response is
/// reported as an HTTP error whatever its body contains.
pub fn parse_response(response: HttpResponse, url: &str) -> ApiResult {
    check_status(&response, url)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::InvalidJson(e.to_string()))
}

/// Flatten a result into the untyped contract: the payload itself, or
/// `{"error": ..., "status_code"?: ...}`.
pub fn into_value(result: ApiResult) -> Value {
    result.unwrap_or_else(|err| err.to_json())
}

/// Map any status outside 200..=299 to `ApiError::Http`.
fn check_status(response: &HttpResponse, url: &str) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        message: status_message(response.status, url),
    })
}

/// e.g. `404 Client Error: Not Found for url: https://host/jokes/random/x`
fn status_message(status: u16, url: &str) -> String {
    let class = match status {
        100..=199 => "Informational",
        300..=399 => "Redirection",
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "Unexpected Status",
    };
    let reason = ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown");
    format!("{status} {class}: {reason} for url: {url}")
}
