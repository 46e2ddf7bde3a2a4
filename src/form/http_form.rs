//! The submittable form.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::errors::{ErrorCollection, ErrorMap};
use crate::form::{Error, Method};
use crate::transport::{Error as TransportError, Request, Response, Transport};

/// User field data, kept in insertion order.
pub type FormData = Map<String, Value>;

/// The mutable part of a form: what the last submission did to it.
#[derive(Debug, Default)]
struct Lifecycle {
    busy: bool,
    successful: bool,
    errors: ErrorCollection,
    // Bumped by every submission so a stale drop guard cannot touch a newer one
    generation: u64,
}

/// A form that can be submitted to a server.
///
/// The form owns its field data separately from the request envelope, so a
/// field may be called `url` or `busy` without affecting the form itself.
///
/// # Examples
///
/// ```
/// use formsubmit_rs::Form;
/// use serde_json::json;
///
/// let data = json!({ "name": "Eva" }).as_object().cloned().unwrap();
/// let form = Form::with_data("post", "/dogs", data).unwrap();
///
/// assert_eq!(form.method().as_str(), "post");
/// assert_eq!(form.field("name"), Some(&json!("Eva")));
/// assert!(!form.is_busy());
/// ```
#[derive(Debug)]
pub struct Form {
    method: Method,
    url: String,
    data: FormData,
    state: Mutex<Lifecycle>,
}

impl Form {
    /// Create a form without any field data.
    pub fn new(method: &str, url: impl Into<String>) -> Result<Self, Error> {
        Self::with_data(method, url, FormData::new())
    }

    /// Create a form with initial field data.
    ///
    /// The method is matched without regard to case and must be one of
    /// [`Method::ALL`].
    pub fn with_data(method: &str, url: impl Into<String>, data: FormData) -> Result<Self, Error> {
        let method = method.parse::<Method>()?;

        Ok(Self {
            method,
            url: url.into(),
            data,
            state: Mutex::new(Lifecycle::default()),
        })
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_get_request(&self) -> bool {
        self.method == Method::GET
    }

    /// All field data.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// The value of a single field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Set a field, returning its previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(name.into(), value.into())
    }

    /// A deep snapshot of the field data to send to the server.
    pub fn payload(&self) -> FormData {
        self.data.clone()
    }

    /// The request a submission would send right now.
    pub fn request(&self) -> Request {
        Request::new(self.method, self.url.clone(), self.payload())
    }

    /// Whether a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// Whether the most recent submission succeeded.
    pub fn is_successful(&self) -> bool {
        self.lock().successful
    }

    /// Whether the server reported any validation errors.
    pub fn has_errors(&self) -> bool {
        self.lock().errors.is_not_empty()
    }

    /// A snapshot of the current validation errors.
    pub fn errors(&self) -> ErrorCollection {
        self.lock().errors.clone()
    }

    /// Mark the form as submitting. Errors from an earlier attempt are kept.
    pub fn start_processing(&self) {
        let mut state = self.lock();
        state.busy = true;
        state.successful = false;
    }

    /// Mark the form as successfully submitted and forget old errors.
    pub fn finish_processing(&self) {
        let mut state = self.lock();
        state.errors.forget();
        state.busy = false;
        state.successful = true;
    }

    /// Mark the form as failed with the errors the server reported.
    pub fn finish_processing_with_errors(&self, errors: ErrorMap) {
        let mut state = self.lock();
        state.errors.set(errors);
        state.busy = false;
        state.successful = false;
    }

    /// Submit the form through `transport`.
    ///
    /// Returns `None` without sending anything when a submission is already
    /// in flight. Otherwise the form is marked busy and [`Transport::send`]
    /// is called before this returns. When the request reaches the network
    /// is up to the transport: `ReqwestTransport` sends it on the first poll
    /// of the returned future.
    ///
    /// The future resolves with the transport's outcome after the form's
    /// state has been updated. On failure the errors are taken from
    /// `response.data.errors`, or cleared when the failure has no such
    /// object.
    ///
    /// Dropping the future early puts the form back into an idle,
    /// unsuccessful state.
    pub fn submit<'a, T>(
        &'a self,
        transport: &'a T,
    ) -> Option<impl Future<Output = Result<Response, TransportError>> + Send + 'a>
    where
        T: Transport + ?Sized,
    {
        let generation = {
            let mut state = self.lock();
            if state.busy {
                warn!(
                    "Double form submission, either debounce or prevent multiple form submissions"
                );
                return None;
            }
            state.busy = true;
            state.successful = false;
            state.generation = state.generation.wrapping_add(1);
            state.generation
        };

        let guard = InFlight {
            form: self,
            generation,
        };
        let request = self.request();
        debug!("Submitting form: {} {}", request.method, request.url);
        let pending = transport.send(request);

        Some(async move {
            let outcome = pending.await;
            guard.disarm();

            match outcome {
                Ok(response) => {
                    debug!("Form submitted to {} with status {}", self.url, response.status);
                    self.finish_processing();
                    Ok(response)
                }
                Err(error) => {
                    debug!("Form submission to {} failed: {error}", self.url);
                    self.finish_processing_with_errors(error.field_errors());
                    Err(error)
                }
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the form to idle if a submission is abandoned before it settles.
struct InFlight<'a> {
    form: &'a Form,
    generation: u64,
}

impl InFlight<'_> {
    /// The transport has answered; the outcome decides the final state.
    fn disarm(self) {
        std::mem::forget(self);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.form.lock();
        if state.busy && state.generation == self.generation {
            debug!("Submission to {} dropped before completion", self.form.url);
            state.busy = false;
            state.successful = false;
        }
    }
}
