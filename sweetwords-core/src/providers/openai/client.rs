//! OpenAI-compatible adapter implementation

use super::types::*;
use crate::config::{ResolvedProvider, SecretString};
use crate::http::HttpClient;
use crate::prompt::chat_prompts;
use crate::protocol::GenerationRequest;
use crate::providers::adapter::{token_budget, ProviderAdapter, TEMPERATURE};
use crate::providers::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Adapter for any vendor speaking the chat completions protocol
#[derive(Debug, Clone)]
pub struct OpenAiAdapter {
    http: HttpClient,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiAdapter {
    /// Create an adapter for a resolved provider
    pub fn new(resolved: &ResolvedProvider, http: HttpClient) -> Self {
        Self {
            http,
            base_url: resolved.base_url.trim_end_matches('/').to_string(),
            api_key: resolved.api_key.clone(),
            model: resolved.model.clone(),
        }
    }

    /// `{base_url}/v1/chat/completions`
    pub fn endpoint(&self) -> ProviderResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, CHAT_COMPLETIONS_PATH))?)
    }

    /// Build the request body for a generation request
    pub fn build_request(&self, request: &GenerationRequest) -> ChatCompletionRequest {
        let prompts = chat_prompts(request);
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompts.system),
                ChatMessage::user(prompts.user),
            ],
            temperature: TEMPERATURE,
            max_tokens: token_budget(request.max_length()),
            stop: None,
        }
    }
}

/// Extract and trim `choices[0].message.content` from a response envelope
pub fn normalize_response(value: Value) -> ProviderResult<String> {
    let envelope: ChatCompletionResponse = serde_json::from_value(value)?;

    let choice = envelope
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Envelope("missing choices[0]".to_string()))?;

    let finish_reason = choice.finish_reason;
    let content = choice
        .message
        .and_then(|message| message.content)
        .ok_or_else(|| {
            ProviderError::Envelope(format!(
                "missing choices[0].message.content{}",
                finish_reason
                    .map(|r| format!(" (finish reason: {})", r))
                    .unwrap_or_default()
            ))
        })?;

    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::Envelope(
            "choices[0].message.content is empty".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &GenerationRequest, request_id: Uuid) -> ProviderResult<String> {
        let url = self.endpoint()?;
        let body = self.build_request(request);
        let response = self
            .http
            .post_json(url, Some(&self.api_key), &body, request_id)
            .await?;
        normalize_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderKind;
    use crate::protocol::Language;
    use serde_json::json;

    fn adapter(base_url: &str) -> OpenAiAdapter {
        let resolved = ResolvedProvider {
            provider: ProviderKind::OpenAI,
            base_url: base_url.to_string(),
            api_key: SecretString::new("sk-test"),
            model: "gpt-4o-mini".to_string(),
        };
        OpenAiAdapter::new(&resolved, HttpClient::new().unwrap())
    }

    #[test]
    fn test_endpoint_appends_chat_path() {
        let url = adapter("https://api.openai.com/").endpoint().unwrap();
        assert_eq!(url.as_str(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest::builder()
            .name("小明")
            .style("温柔")
            .scene("晚安")
            .lengths(20, 30)
            .language(Language::Zh)
            .build()
            .unwrap();
        let body = serde_json::to_value(adapter("https://api.openai.com").build_request(&request))
            .unwrap();

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 60);
        assert!(body["stop"].is_null());
        assert!(body.as_object().unwrap().contains_key("stop"));
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(body["messages"][1]["content"].as_str().unwrap().contains("小明"));
    }

    #[test]
    fn test_normalize_trims_content() {
        let value = json!({
            "choices": [{ "message": { "role": "assistant", "content": "  晚安，小明。\n" }, "finish_reason": "stop" }]
        });
        assert_eq!(normalize_response(value).unwrap(), "晚安，小明。");
    }

    #[test]
    fn test_normalize_missing_choices() {
        let err = normalize_response(json!({ "choices": [] })).unwrap_err();
        assert_eq!(err.to_string(), "Invalid response: missing choices[0]");
    }

    #[test]
    fn test_normalize_null_content() {
        let value = json!({ "choices": [{ "message": { "content": null }, "finish_reason": "length" }] });
        let err = normalize_response(value).unwrap_err();
        assert!(err.to_string().contains("finish reason: length"));
    }
}
