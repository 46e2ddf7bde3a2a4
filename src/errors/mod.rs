//! Server-reported validation errors.
//!
//! This module holds the per-field validation messages a server sends back
//! when it rejects a form submission.

mod collection;

// Re-export public items
pub use collection::{ErrorCollection, ErrorMap, error_map_from_value};
