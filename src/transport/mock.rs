//! An in-memory transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::json;
use tokio::sync::oneshot;

use crate::transport::{Error, Request, Response, Transport, TransportFuture};

enum Outcome {
    Ready(Result<Response, Error>),
    Deferred(oneshot::Receiver<Result<Response, Error>>),
}

/// Records every request and replays queued outcomes in order.
#[derive(Default)]
pub(crate) struct MockTransport {
    calls: Mutex<Vec<Request>>,
    outcomes: Mutex<VecDeque<Outcome>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome that resolves as soon as the request is awaited.
    pub(crate) fn respond_with(&self, outcome: Result<Response, Error>) {
        self.outcomes.lock().unwrap().push_back(Outcome::Ready(outcome));
    }

    /// Queue an outcome that resolves once the returned sender fires.
    pub(crate) fn respond_later(&self) -> oneshot::Sender<Result<Response, Error>> {
        let (tx, rx) = oneshot::channel();
        self.outcomes.lock().unwrap().push_back(Outcome::Deferred(rx));
        tx
    }

    pub(crate) fn calls(&self) -> Vec<Request> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: Request) -> TransportFuture<'_> {
        self.calls.lock().unwrap().push(request);
        let outcome = self.outcomes.lock().unwrap().pop_front();

        Box::pin(async move {
            match outcome {
                Some(Outcome::Ready(result)) => result,
                Some(Outcome::Deferred(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(Error::Network("mocked response dropped".to_string()))),
                None => Err(Error::Network("no mocked response".to_string())),
            }
        })
    }
}

/// A successful listing of dogs.
pub(crate) fn success() -> Response {
    Response::new(
        200,
        json!([
            { "id": 1, "name": "Eva" },
            { "id": 2, "name": "Otto" },
            { "id": 3, "name": "Loki" }
        ]),
    )
}

/// A validation failure for the `foo` field.
pub(crate) fn error() -> Error {
    Error::Status(Response::new(
        422,
        json!({ "errors": { "foo": ["The foo field is required"] } }),
    ))
}
