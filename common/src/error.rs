//! Error types shared by the frontend and the tree builder.

use serde_json::Value;
use thiserror::Error;

use crate::requests::ErrorBody;

/// Failure of a call to the solutions API.
///
/// Every call site in the frontend converts this into display text; it never
/// escapes the component that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (connection refused, CORS, ...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded into the expected type.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Builds a `Status` error from a non-2xx response body.
    ///
    /// The message is taken from `detail`, then `error`, then the raw JSON
    /// text; bodies that are not JSON are used verbatim. An empty body falls
    /// back to a generic message naming the status.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(value) => serde_json::from_value::<ErrorBody>(value.clone())
                .ok()
                .and_then(|b| b.message().map(str::to_string))
                .unwrap_or_else(|| value.to_string()),
            Err(_) if body.trim().is_empty() => format!("HTTP error! status: {}", status),
            Err(_) => body.to_string(),
        };
        FetchError::Status { status, message }
    }
}

/// A solution filename that cannot be placed in the tree: it is empty or
/// contains an empty segment (leading, trailing or doubled `/`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid solution path {path:?}: {reason}")]
pub struct InvalidPathError {
    pub path: String,
    pub reason: &'static str,
}

impl InvalidPathError {
    pub(crate) fn new(path: &str, reason: &'static str) -> Self {
        Self {
            path: path.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_detail_then_error() {
        let err = FetchError::from_status(404, r#"{"detail":"File not found","error":"x"}"#);
        assert_eq!(err.to_string(), "File not found");

        let err = FetchError::from_status(400, r#"{"error":"bad rating"}"#);
        assert_eq!(err.to_string(), "bad rating");
        assert!(matches!(err, FetchError::Status { status: 400, .. }));
    }

    #[test]
    fn status_message_falls_back_to_raw_body() {
        let err = FetchError::from_status(500, r#"{"code":7}"#);
        assert_eq!(err.to_string(), r#"{"code":7}"#);

        let err = FetchError::from_status(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = FetchError::from_status(503, "");
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }
}
