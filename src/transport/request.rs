//! Outgoing requests built from a form.

use serde_json::Value;

use crate::form::{FormData, Method};

/// Where the form data travels in the request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Encoded into the query string.
    Query(FormData),
    /// Sent as a JSON body.
    Body(FormData),
}

impl Payload {
    /// The form data regardless of where it travels.
    pub fn data(&self) -> &FormData {
        match self {
            Payload::Query(data) | Payload::Body(data) => data,
        }
    }

    /// The query parameters, if this payload is sent as a query.
    pub fn params(&self) -> Option<&FormData> {
        match self {
            Payload::Query(data) => Some(data),
            Payload::Body(_) => None,
        }
    }

    /// The request body, if this payload is sent as a body.
    pub fn body(&self) -> Option<&FormData> {
        match self {
            Payload::Body(data) => Some(data),
            Payload::Query(_) => None,
        }
    }
}

/// A request ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The destination URL, possibly relative
    pub url: String,
    /// The form data and how it is carried
    pub payload: Payload,
}

impl Request {
    /// Build a request, placing `data` in the query string for GET and in
    /// the body for every other method.
    ///
    /// HEAD, OPTIONS and DELETE therefore carry a JSON body as well. Servers
    /// may ignore it; build the request by hand when a verb must go out
    /// without one.
    pub fn new(method: Method, url: impl Into<String>, data: FormData) -> Self {
        let payload = match method {
            Method::GET => Payload::Query(data),
            _ => Payload::Body(data),
        };

        Self {
            method,
            url: url.into(),
            payload,
        }
    }
}

/// Flatten form data into query string pairs.
///
/// Null fields are left out, arrays expand into repeated `key[]` pairs and
/// objects are JSON-encoded.
pub fn query_pairs(data: &FormData) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(data.len());

    for (key, value) in data {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                let key = format!("{key}[]");
                pairs.extend(items.iter().map(|item| (key.clone(), query_value(item))));
            }
            _ => pairs.push((key.clone(), query_value(value))),
        }
    }

    pairs
}

fn query_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
