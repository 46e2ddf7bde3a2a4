//! HTTP transport for form submissions.
//!
//! Forms never talk to the network directly; they hand a [`Request`] to a
//! [`Transport`] and react to the [`Response`] or [`Error`] it produces.

mod client;
mod config;
mod error;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(feature = "reqwest")]
mod reqwest_transport;
mod request;
mod response;

// Re-export public items
pub use client::{Transport, TransportFuture};
pub use config::TransportConfig;
pub use error::Error;
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
pub use request::{Payload, Request, query_pairs};
pub use response::Response;
