//! Gemini adapter implementation

use super::types::*;
use crate::config::{ResolvedProvider, SecretString};
use crate::http::HttpClient;
use crate::prompt::single_prompt;
use crate::protocol::GenerationRequest;
use crate::providers::adapter::{token_budget, ProviderAdapter, TEMPERATURE};
use crate::providers::{ProviderError, ProviderResult};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";
const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// Adapter for the Gemini `generateContent` API
///
/// Auth is via an API key passed as a query parameter (`key={api_key}`).
#[derive(Debug, Clone)]
pub struct GeminiAdapter {
    http: HttpClient,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl GeminiAdapter {
    /// Create an adapter for a resolved provider
    pub fn new(resolved: &ResolvedProvider, http: HttpClient) -> Self {
        Self {
            http,
            base_url: resolved.base_url.trim_end_matches('/').to_string(),
            api_key: resolved.api_key.clone(),
            model: resolved.model.clone(),
        }
    }

    /// `{base_url}/models/{model}:generateContent?key={api_key}`
    pub fn endpoint(&self) -> ProviderResult<Url> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        ))?;
        url.query_pairs_mut()
            .append_pair("key", self.api_key.expose_secret());
        Ok(url)
    }

    /// Build the request body for a generation request
    pub fn build_request(request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: Some(single_prompt(request)),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: token_budget(request.max_length()),
            },
            safety_settings: SAFETY_CATEGORIES
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }
}

/// Extract `candidates[0].content.parts[0].text` from a response envelope
pub fn normalize_response(value: Value) -> ProviderResult<String> {
    let envelope: GeminiResponse = serde_json::from_value(value)?;

    let candidate = match envelope.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            let reason = envelope
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .map(|r| format!(" (prompt blocked: {})", r))
                .unwrap_or_default();
            return Err(ProviderError::Envelope(format!(
                "missing candidates[0]{}",
                reason
            )));
        }
    };

    let finish_reason = candidate.finish_reason;
    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            ProviderError::Envelope(format!(
                "missing candidates[0].content.parts[0].text{}",
                finish_reason
                    .map(|r| format!(" (finish reason: {})", r))
                    .unwrap_or_default()
            ))
        })?;

    if text.trim().is_empty() {
        return Err(ProviderError::Envelope(
            "candidates[0].content.parts[0].text is empty".to_string(),
        ));
    }

    Ok(text)
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &GenerationRequest, request_id: Uuid) -> ProviderResult<String> {
        let url = self.endpoint()?;
        let body = Self::build_request(request);
        let response = self.http.post_json(url, None, &body, request_id).await?;
        normalize_response(response)
    }
}
