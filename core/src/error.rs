//! Error values returned by `ApiRequest` operations.
//!
//! # Design
//! Every failure is reported as data. Each variant's `Display` output is
//! exactly the `error` message callers see in the JSON mapping, and only the
//! HTTP variant carries a `status_code`. Callers can branch on the variant,
//! on `status_code()`, or on the message prefix without catching anything.

use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use thiserror::Error;

/// A failure normalized at the boundary of an `ApiRequest` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No HTTP response was obtained (connection refused, DNS, timeout).
    #[error("Request error: {0}")]
    Request(String),

    /// A response arrived with a non-2xx status. The body is not inspected.
    #[error("HTTP error occurred: {message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),
}

/// Wire shape of an `ApiError`: `{"error": ..., "status_code": ...}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,
}

impl ApiError {
    /// Numeric status for HTTP failures, `None` for the other kinds.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Request(_) | ApiError::InvalidJson(_) => None,
        }
    }

    fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            status_code: self.status_code(),
        }
    }

    /// The error as a JSON object with `error` and, for HTTP failures,
    /// `status_code`.
    pub fn to_json(&self) -> Value {
        match self.status_code() {
            Some(status) => json!({ "error": self.to_string(), "status_code": status }),
            None => json!({ "error": self.to_string() }),
        }
    }
}

impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_has_no_status_code() {
        let err = ApiError::Request("Connection failed".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.to_json(), json!({"error": "Request error: Connection failed"}));
    }

    #[test]
    fn http_error_carries_status_code() {
        let err = ApiError::Http {
            status: 400,
            message: "400 Client Error: Bad Request for url: http://x/jokes/random".to_string(),
        };
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(
            err.to_json(),
            json!({
                "error": "HTTP error occurred: 400 Client Error: Bad Request for url: http://x/jokes/random",
                "status_code": 400
            })
        );
    }

    #[test]
    fn invalid_json_error_has_no_status_code() {
        let err = ApiError::InvalidJson("expected value at line 1 column 1".to_string());
        let json = err.to_json();
        assert_eq!(json["error"], "Invalid JSON response: expected value at line 1 column 1");
        assert!(json.get("status_code").is_none());
    }

    #[test]
    fn serialize_matches_to_json() {
        let err = ApiError::Http {
            status: 503,
            message: "503 Server Error: Service Unavailable for url: u".to_string(),
        };
        assert_eq!(serde_json::to_value(&err).unwrap(), err.to_json());
    }
}
