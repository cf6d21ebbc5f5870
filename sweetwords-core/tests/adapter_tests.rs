//! Integration tests for the vendor adapters against a mock HTTP server

use serde_json::json;
use sweetwords_core::config::{ProviderKind, ResolvedProvider, SecretString};
use sweetwords_core::http::HttpClient;
use sweetwords_core::providers::{GeminiAdapter, OpenAiAdapter, ProviderAdapter};
use sweetwords_core::{GenerationRequest, Language};
use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolved(provider: ProviderKind, base_url: &str, api_key: &str, model: &str) -> ResolvedProvider {
    ResolvedProvider {
        provider,
        base_url: base_url.to_string(),
        api_key: SecretString::new(api_key),
        model: model.to_string(),
    }
}

fn english_request(max_length: u32) -> GenerationRequest {
    GenerationRequest::builder()
        .name("Alex")
        .style("sweet")
        .scene("morning")
        .keywords(["sun"])
        .lengths(20, max_length)
        .language(Language::En)
        .build()
        .unwrap()
}

fn gemini(server: &MockServer) -> GeminiAdapter {
    GeminiAdapter::new(
        &resolved(ProviderKind::Google, &server.uri(), "g-key", "gemini-1.5-pro"),
        HttpClient::new().unwrap(),
    )
}

fn openai(server: &MockServer) -> OpenAiAdapter {
    OpenAiAdapter::new(
        &resolved(ProviderKind::OpenAI, &server.uri(), "sk-test", "gpt-4o"),
        HttpClient::new().unwrap(),
    )
}

#[tokio::test]
async fn test_openai_success_trims_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "max_tokens": 60,
            "temperature": 0.7,
            "stop": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "role": "assistant", "content": "  Good morning, Alex.  " },
                "finish_reason": "stop"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = openai(&server).generate(&english_request(30)).await;

    assert!(result.is_ok());
    assert_eq!(result.content, "Good morning, Alex.");
}

#[tokio::test]
async fn test_openai_sends_system_and_user_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Hi" } }]
        })))
        .mount(&server)
        .await;

    openai(&server).generate(&english_request(30)).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["role"], "user");
    let user = body["messages"][1]["content"].as_str().unwrap();
    assert!(user.contains("Alex"));
    assert!(user.contains("sun"));
}

#[tokio::test]
async fn test_gemini_success_passes_key_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .and(query_param("key", "g-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "temperature": 0.7, "topK": 40, "topP": 0.95, "maxOutputTokens": 60 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Sunrise, Alex.\n" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = gemini(&server).generate(&english_request(30)).await;

    assert!(result.is_ok());
    assert_eq!(result.content, "Sunrise, Alex.\n");
}

#[tokio::test]
async fn test_gemini_sends_no_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
        })))
        .mount(&server)
        .await;

    gemini(&server).generate(&english_request(30)).await;

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_gemini_missing_candidates_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let result = gemini(&server).generate(&english_request(30)).await;

    assert!(!result.is_ok());
    assert!(result.content.is_empty());
    assert!(result.error.unwrap().contains("candidates"));
}

#[tokio::test]
async fn test_non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = openai(&server).generate(&english_request(30)).await;
    assert_eq!(result.error.as_deref(), Some("HTTP error! status: 401"));
    assert!(result.content.is_empty());

    let result = gemini(&server).generate(&english_request(30)).await;
    assert_eq!(result.error.as_deref(), Some("HTTP error! status: 429"));
}

#[tokio::test]
async fn test_non_json_body_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = openai(&server).generate(&english_request(30)).await;

    assert!(!result.is_ok());
    assert!(result.error.unwrap().starts_with("Invalid response"));
}

#[tokio::test]
async fn test_connection_failure_is_failure() {
    let adapter = OpenAiAdapter::new(
        &resolved(ProviderKind::Custom, "http://127.0.0.1:1", "k", "custom-model"),
        HttpClient::new().unwrap(),
    );

    let result = adapter.generate(&english_request(30)).await;

    assert!(!result.is_ok());
    assert!(result.content.is_empty());
    assert!(result.error.is_some());
}

#[tokio::test]
async fn test_token_budget_tracks_max_length() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "max_tokens": 120 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "long" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = openai(&server).generate(&english_request(60)).await;
    assert!(result.is_ok());
}
