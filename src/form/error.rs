//! Error types for building a form.

use thiserror::Error;

use crate::form::Method;

/// Errors that can occur while constructing a [`Form`](crate::form::Form).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The HTTP method is not one a form can be submitted with.
    #[error("Unknown method provided, must be one of the following: {}", join_methods(.accepted))]
    InvalidMethod {
        /// The method as it was given.
        method: String,
        /// The methods that would have been accepted.
        accepted: Vec<Method>,
    },
}

fn join_methods(methods: &[Method]) -> String {
    methods
        .iter()
        .map(|m| format!("{m}"))
        .collect::<Vec<String>>()
        .join(", ")
}
