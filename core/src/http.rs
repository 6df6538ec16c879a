//! HTTP transport types shared by the client and its transports.
//!
//! # Design
//! Requests and responses are plain data. `ApiRequest` builds an
//! `HttpRequest`, hands it to a `Transport`, and parses whatever
//! `HttpResponse` comes back. Keeping these as owned values lets tests
//! replay canned responses without a socket.

/// An outbound GET request described as plain data.
///
/// Every endpoint of the joke API is a body-less GET, so only the target
/// URL and headers are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// `body` is the payload decoded as UTF-8 with invalid sequences replaced,
/// so reading it never fails on content.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
