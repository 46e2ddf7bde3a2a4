//! HTTP response values handed back by a transport.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A server reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// The decoded response body
    pub data: Value,
}

impl Response {
    /// Create a response with the given status and body.
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the response body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.data)
    }

    /// Build a response from a raw body.
    ///
    /// JSON bodies are decoded, anything else is kept as a string and an
    /// empty body becomes `null`.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
        };

        Self::new(status, data)
    }
}
