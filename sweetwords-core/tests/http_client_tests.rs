//! Integration tests for response size limits in the HTTP layer

use serde_json::json;
use sweetwords_core::http::HttpClient;
use sweetwords_core::providers::ProviderError;
use url::Url;
use uuid::Uuid;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn post(server: &MockServer, client: &HttpClient) -> Result<serde_json::Value, ProviderError> {
    let url = Url::parse(&format!("{}/v1/chat/completions", server.uri())).unwrap();
    client
        .post_json(url, None, &json!({ "model": "gpt-4o" }), Uuid::new_v4())
        .await
}

#[tokio::test]
async fn test_oversized_error_body_keeps_status() {
    let server = MockServer::start().await;
    let padding = "x".repeat(4096);
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "message": "upstream exploded", "trace": padding }
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap().with_max_response_size(1024);
    let err = post(&server, &client).await.unwrap_err();

    assert!(matches!(err, ProviderError::Http { status: 500, detail: None }));
}

#[tokio::test]
async fn test_small_error_body_keeps_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap().with_max_response_size(1024);
    match post(&server, &client).await.unwrap_err() {
        ProviderError::Http { status, detail } => {
            assert_eq!(status, 401);
            assert_eq!(detail.as_deref(), Some("Incorrect API key provided"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_oversized_success_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "y".repeat(4096) } }]
        })))
        .mount(&server)
        .await;

    let client = HttpClient::new().unwrap().with_max_response_size(1024);
    let err = post(&server, &client).await.unwrap_err();

    assert!(matches!(err, ProviderError::ResponseTooLarge { max: 1024, .. }));
}
