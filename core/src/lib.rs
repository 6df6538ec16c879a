//! Synchronous client for a public joke-retrieval HTTP API.
//!
//! # Overview
//! `ApiRequest` exposes `get_random`, `get_categories` and `find_specific`.
//! Each issues one GET and returns an `ApiResult`: the decoded JSON payload
//! verbatim, or an `ApiError` describing a transport failure, a non-2xx
//! status, or an undecodable body. Nothing panics on network or payload
//! problems.
//!
//! # Design
//! - `ApiRequest` is stateless; it holds a base URL, a user agent and a
//!   `Transport`.
//! - Request building and response parsing are separate steps around the
//!   transport, so tests can replay canned responses without a socket.
//! - `ApiError::to_json` and `into_value` give the untyped
//!   `{"error", "status_code"?}` mapping for callers that want it.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;

pub use client::{into_value, parse_response, ApiRequest, ApiResult};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError, UreqTransport};
