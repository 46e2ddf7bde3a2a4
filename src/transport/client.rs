//! The transport abstraction forms submit through.

use std::future::Future;
use std::pin::Pin;

use crate::form::{FormData, Method};
use crate::transport::{Error, Request, Response};

/// Type alias for a boxed future that returns a Result<Response, Error>.
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<Response, Error>> + Send + 'a>>;

/// Something that can carry a [`Request`] to a server.
///
/// `send` takes ownership of the request when it is called, but nothing is
/// guaranteed to reach the network until the returned future is polled.
/// `ReqwestTransport` sends on the first poll, like any lazy future, and
/// dropping its future unpolled sends nothing.
pub trait Transport: Send + Sync {
    /// Send a request and resolve with the server's reply.
    fn send(&self, request: Request) -> TransportFuture<'_>;

    /// Send a GET request with `data` as query parameters.
    fn get(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::GET, url, data))
    }

    /// Send a POST request with `data` as the body.
    fn post(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::POST, url, data))
    }

    /// Send a PUT request with `data` as the body.
    fn put(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::PUT, url, data))
    }

    /// Send a PATCH request with `data` as the body.
    fn patch(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::PATCH, url, data))
    }

    /// Send a DELETE request with `data` as the body.
    fn delete(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::DELETE, url, data))
    }

    /// Send an OPTIONS request with `data` as the body.
    fn options(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::OPTIONS, url, data))
    }

    /// Send a HEAD request with `data` as the body.
    fn head(&self, url: &str, data: FormData) -> TransportFuture<'_> {
        self.send(Request::new(Method::HEAD, url, data))
    }
}
