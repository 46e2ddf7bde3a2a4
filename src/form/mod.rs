//! Submittable forms.
//!
//! A [`Form`] pairs a request envelope (method and URL) with user field data,
//! tracks whether a submission is in flight or succeeded, and collects the
//! validation errors a server reports back.

mod error;
mod http_form;
mod method;

// Re-export public items
pub use error::Error;
pub use http_form::{Form, FormData};
pub use method::Method;
