//! HTTP error mapping utilities

use crate::providers::ProviderError;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

/// Map a non-success HTTP status and response body to a ProviderError
pub fn map_http_error(status: StatusCode, body: Option<String>, request_id: Uuid) -> ProviderError {
    let detail = body
        .as_deref()
        .and_then(|b| serde_json::from_str::<Value>(b).ok())
        .and_then(|v| extract_error_message(&v));

    warn!(
        "Request failed with status {} [request_id: {}]: {}",
        status.as_u16(),
        request_id,
        detail.as_deref().unwrap_or("no error detail")
    );

    ProviderError::Http {
        status: status.as_u16(),
        detail,
    }
}

/// Extract a vendor error message from a JSON error body
fn extract_error_message(json: &Value) -> Option<String> {
    // OpenAI, Anthropic and Gemini all use { "error": { "message": "..." } }
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    // Generic format: { "message": "..." } or { "error": "..." }
    json.get("message")
        .and_then(Value::as_str)
        .or_else(|| json.get("error").and_then(Value::as_str))
        .map(str::to_string)
}
