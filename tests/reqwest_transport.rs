//! End-to-end tests for submitting forms over HTTP with the reqwest transport.

#![cfg(feature = "reqwest")]

use std::time::Duration;

use serde_json::{Value, json};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use formsubmit_rs::{Form, FormData, ReqwestTransport, TransportConfig, TransportError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn data(value: Value) -> FormData {
    value.as_object().cloned().unwrap()
}

fn transport_for(server: &MockServer) -> ReqwestTransport {
    ReqwestTransport::new(TransportConfig::with_base_url(server.uri())).unwrap()
}

#[tokio::test]
async fn test_get_form_sends_query_string() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dogs"))
        .and(query_param("name", "Eva"))
        .and(query_param("page", "2"))
        .and(header_regex("user-agent", "^formsubmit-rs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Eva" }])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let form = Form::with_data("GET", "/dogs", data(json!({ "name": "Eva", "page": 2 }))).unwrap();

    let response = form.submit(&transport).unwrap().await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!([{ "id": 1, "name": "Eva" }]));
    assert!(form.is_successful());
    assert!(!form.is_busy());
}

#[tokio::test]
async fn test_post_form_sends_json_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dogs"))
        .and(body_json(json!({ "name": "Eva" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 4, "name": "Eva" })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let form = Form::with_data("post", "/dogs", data(json!({ "name": "Eva" }))).unwrap();

    let response = form.submit(&transport).unwrap().await.unwrap();

    assert_eq!(response.status, 201);
    assert_eq!(response.data["id"], json!(4));
    assert!(form.is_successful());
}

#[tokio::test]
async fn test_validation_failure_populates_errors() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/dogs/1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": { "name": ["The name field is required"] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let form = Form::new("PUT", "/dogs/1").unwrap();

    let error = form.submit(&transport).unwrap().await.unwrap_err();

    assert!(matches!(error, TransportError::Status(ref r) if r.status == 422));
    assert!(!form.is_busy());
    assert!(!form.is_successful());
    assert!(form.has_errors());
    assert_eq!(form.errors().get("name"), "The name field is required");
}

#[tokio::test]
async fn test_absolute_url_ignores_base_url() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/dogs/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let transport =
        ReqwestTransport::new(TransportConfig::with_base_url("http://unused.invalid")).unwrap();
    let form = Form::new("DELETE", format!("{}/dogs/1", server.uri())).unwrap();

    let response = form.submit(&transport).unwrap().await.unwrap();

    assert_eq!(response.status, 204);
    assert_eq!(response.data, Value::Null);
}

#[tokio::test]
async fn test_request_is_sent_on_first_poll() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/dogs"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let form = Form::with_data("POST", "/dogs", data(json!({ "name": "Eva" }))).unwrap();

    let pending = form.submit(&transport).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    // The form is busy, but nothing has reached the server yet
    assert!(form.is_busy());
    assert!(server.received_requests().await.unwrap().is_empty());

    pending.await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
    assert!(form.is_successful());
}

#[tokio::test]
async fn test_unpolled_submission_sends_nothing() {
    init_logging();
    let server = MockServer::start().await;
    let transport = transport_for(&server);
    let form = Form::new("POST", "/dogs").unwrap();

    drop(form.submit(&transport).unwrap());
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(server.received_requests().await.unwrap().is_empty());
    assert!(!form.is_busy());
}

#[tokio::test]
async fn test_connection_failure_leaves_form_idle() {
    init_logging();
    // Reserve a free port, then close it so the connection is refused
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = TransportConfig::with_base_url(format!("http://{addr}"));
    let transport = ReqwestTransport::new(config).unwrap();
    let form = Form::with_data("POST", "/dogs", data(json!({ "name": "Eva" }))).unwrap();
    form.finish_processing_with_errors(
        [("name".to_string(), vec!["The name field is required".to_string()])].into(),
    );

    let error = form.submit(&transport).unwrap().await.unwrap_err();

    assert!(matches!(error, TransportError::Http(_)));
    assert!(error.response().is_none());
    assert!(!form.is_busy());
    assert!(!form.is_successful());
    assert!(!form.has_errors());
}
