//! Error types for the API client.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed before a response was received (DNS, connection
    /// refused, timeout).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),
    /// The combined base URL and endpoint did not parse as a URL.
    #[error("invalid request URL")]
    InvalidUrl(#[from] url::ParseError),
    /// The API answered with a non-success status. The full request context
    /// is attached so callers can branch on it without consulting the log.
    #[error("request failed with status {}", .0.error_code)]
    Http(Box<ApiErrorReport>),
    /// A success response carried a body that was not valid JSON.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// The attached error report, for `Http` errors.
    pub fn report(&self) -> Option<&ApiErrorReport> {
        match self {
            Error::Http(report) => Some(report),
            _ => None,
        }
    }
}

/// Structured description of a failed API request.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorReport {
    /// Numeric HTTP status code.
    pub error_code: u16,
    /// The fully resolved request URL, query string included.
    pub response_url: String,
    /// The error body: decoded JSON when possible, the raw text otherwise.
    pub response_body: Value,
    /// Headers that were sent with the request.
    pub request_headers: BTreeMap<String, String>,
    /// HTTP verb of the failed request.
    pub request_method: String,
}

impl fmt::Display for ApiErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
