//! The seam between `ApiRequest` and the network.
//!
//! `UreqTransport` is the production implementation. Tests swap in fakes that
//! replay canned `HttpResponse` values or fail before any response exists.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::http::{HttpRequest, HttpResponse};

/// No HTTP response could be obtained for a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        TransportError(err.to_string())
    }
}

/// Executes a GET and returns the raw response.
///
/// Implementations must return `Ok` for every response the server sends,
/// including 4xx/5xx. `Err` is reserved for failures where no response was
/// obtained.
pub trait Transport: Send + Sync {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// `timeout` bounds the whole call; `None` keeps ureq's defaults.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let mut response = builder.call()?;
        let status = response.status().as_u16();
        let bytes = if (200..300).contains(&status) {
            response.body_mut().read_to_vec()?
        } else {
            // The body of an error response is never parsed; a failed read
            // must not hide the status.
            response.body_mut().read_to_vec().unwrap_or_else(|err| {
                debug!(url = %request.url, status, error = %err, "discarding unreadable error body");
                Vec::new()
            })
        };
        let body = String::from_utf8_lossy(&bytes).into_owned();
        debug!(url = %request.url, status, bytes = bytes.len(), "received response");

        Ok(HttpResponse { status, body })
    }
}
