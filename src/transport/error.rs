//! Error types for the HTTP transport.

use thiserror::Error;

use crate::errors::{ErrorMap, error_map_from_value};
use crate::transport::Response;

/// Errors that can occur while carrying a request to a server.
#[derive(Debug, Error)]
pub enum Error {
    /// The server replied with a non-success status code.
    #[error("Request failed with status code {}", .0.status)]
    Status(Response),

    /// The request failed before any reply was received.
    #[error("Network error: {0}")]
    Network(String),

    /// Error raised by the underlying HTTP client.
    #[cfg(feature = "reqwest")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// The server's reply, when the failure carries one.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Status(response) => Some(response),
            _ => None,
        }
    }

    /// The field errors found at `response.data.errors`.
    ///
    /// Failures without a reply, or whose reply does not hold an `errors`
    /// object, yield an empty map.
    pub fn field_errors(&self) -> ErrorMap {
        self.response()
            .and_then(|response| response.data.get("errors"))
            .and_then(error_map_from_value)
            .unwrap_or_default()
    }
}
