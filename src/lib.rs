//! A small form-submission helper.
//!
//! This library tracks a set of form field values, submits them as an HTTP
//! request, and turns the validation errors a server sends back into a
//! queryable collection.
//!
//! # Features
//!
//! - Forms for the common HTTP methods (GET, POST, PUT, PATCH, DELETE, OPTIONS, HEAD)
//! - Busy/successful lifecycle tracking with a guard against double submission
//! - Per-field validation errors read from `response.data.errors`
//! - A pluggable [`Transport`] with a `reqwest` implementation behind the `reqwest` feature
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```no_run
//! # #[cfg(feature = "reqwest")]
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use formsubmit_rs::{Form, ReqwestTransport, TransportConfig};
//! use serde_json::json;
//!
//! let transport = ReqwestTransport::new(TransportConfig::with_base_url("http://localhost:8080"))?;
//! let data = json!({ "name": "Eva" }).as_object().cloned().unwrap_or_default();
//! let form = Form::with_data("POST", "/dogs", data)?;
//!
//! if let Some(submission) = form.submit(&transport) {
//!     match submission.await {
//!         Ok(response) => println!("Created: {}", response.data),
//!         Err(err) => println!("Rejected ({err}), name error: {}", form.errors().get("name")),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! ```
//! use formsubmit_rs::{Form, FormError};
//!
//! match Form::new("FOO", "/dogs") {
//!     Ok(_) => println!("Form created"),
//!     Err(FormError::InvalidMethod { method, accepted }) => {
//!         println!("{method} is not one of {accepted:?}")
//!     }
//! }
//! ```
//!
//! ## Validation errors
//!
//! ```
//! use formsubmit_rs::ErrorCollection;
//! use serde_json::json;
//!
//! let mut errors = ErrorCollection::new();
//! errors.set_value(&json!({ "name": ["The name field is required"] }));
//!
//! assert!(errors.has("name"));
//! assert_eq!(errors.get("name"), "The name field is required");
//! assert_eq!(errors.get("age"), "");
//! ```

// Export the errors module
pub mod errors;

// Export the form module
pub mod form;

// Export the transport module
pub mod transport;

// Re-export commonly used items for convenience
pub use errors::{ErrorCollection, ErrorMap};
pub use form::{Error as FormError, Form, FormData, Method};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::{
    Error as TransportError, Payload, Request, Response, Transport, TransportConfig,
};
