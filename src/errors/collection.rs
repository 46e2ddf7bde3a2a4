//! A queryable collection of per-field validation messages.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field name to the ordered list of messages reported for it.
pub type ErrorMap = HashMap<String, Vec<String>>;

/// Validation errors keyed by field name.
///
/// The collection is only ever replaced wholesale (`set`, `set_value`) or
/// cleared (`forget`); individual fields are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCollection {
    items: ErrorMap,
}

impl ErrorCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Determine if the collection has no errors.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Determine if the collection has any errors.
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Number of fields with at least one reported entry.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Determine if the collection has errors for a given field.
    pub fn has(&self, field: &str) -> bool {
        self.items.contains_key(field)
    }

    /// Get the first error message for a given field.
    ///
    /// Returns an empty string when the field has no messages.
    pub fn get(&self, field: &str) -> &str {
        self.items
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Get all of the raw errors.
    pub fn all(&self) -> &ErrorMap {
        &self.items
    }

    /// Replace the errors with a new map.
    pub fn set(&mut self, errors: ErrorMap) {
        self.items = errors;
    }

    /// Replace the errors from a decoded JSON value.
    ///
    /// Only JSON objects are accepted. Any other value leaves the current
    /// errors untouched.
    pub fn set_value(&mut self, errors: &Value) {
        if let Some(map) = error_map_from_value(errors) {
            self.items = map;
        }
    }

    /// Reset the errors.
    pub fn forget(&mut self) {
        self.items.clear();
    }
}

impl From<ErrorMap> for ErrorCollection {
    fn from(items: ErrorMap) -> Self {
        Self { items }
    }
}

/// Normalize a JSON value into an [`ErrorMap`].
///
/// Returns `None` unless `value` is an object. Within the object, lists keep
/// their elements as text, a bare string becomes a single message, and any
/// other entry is skipped.
pub fn error_map_from_value(value: &Value) -> Option<ErrorMap> {
    let object = value.as_object()?;

    let map = object
        .iter()
        .filter_map(|(field, messages)| {
            let messages = match messages {
                Value::Array(list) => list.iter().filter_map(message_text).collect(),
                Value::String(message) => vec![message.clone()],
                _ => return None,
            };
            Some((field.clone(), messages))
        })
        .collect();

    Some(map)
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
