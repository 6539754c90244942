use std::time::Duration;

use chatbox_client::{ChatBackend, ExchangeError, HttpBackend};
use chatbox_types::ChatReply;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_reply(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(template)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_posts_message_and_reads_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "1. Hi there",
            "error": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply, ChatReply::Message("1. Hi there".to_string()));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let backend = HttpBackend::new("http://127.0.0.1:8000/").unwrap();
    assert_eq!(backend.url(), "http://127.0.0.1:8000/api/chat");
}

#[tokio::test]
async fn test_error_body_is_backend_error() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "error": "rate limited" })),
    )
    .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(reply, ChatReply::Error("rate limited".to_string()));
}

#[tokio::test]
async fn test_error_body_with_gateway_status() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(504).set_body_json(json!({
            "message": "",
            "error": "Request to AI model timed out. Please try again."
        })),
    )
    .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let reply = backend.send("hello").await.unwrap();

    assert_eq!(
        reply,
        ChatReply::Error("Request to AI model timed out. Please try again.".to_string())
    );
}

#[tokio::test]
async fn test_plain_server_error_is_status_failure() {
    let server = MockServer::start().await;
    mock_reply(&server, ResponseTemplate::new(500).set_body_string("Internal Server Error")).await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let err = backend.send("hello").await.unwrap_err();

    assert!(matches!(err, ExchangeError::Status { status: 500 }));
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "response": "wrong field" })),
    )
    .await;

    let backend = HttpBackend::new(&server.uri()).unwrap();
    let err = backend.send("hello").await.unwrap_err();

    assert!(matches!(err, ExchangeError::Malformed(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    mock_reply(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({ "message": "late" }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let backend = HttpBackend::with_timeout(&server.uri(), Some(Duration::from_millis(200))).unwrap();
    let err = backend.send("hello").await.unwrap_err();

    assert!(matches!(err, ExchangeError::Timeout));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    // Nothing listens on port 9 (discard) in the test environment
    let backend = HttpBackend::with_timeout("http://127.0.0.1:9", Some(Duration::from_secs(5))).unwrap();
    let err = backend.send("hello").await.unwrap_err();

    assert!(matches!(err, ExchangeError::Transport(_) | ExchangeError::Timeout));
}
