//! Provider adapter trait and the closed set of adapter families
//!
//! Every vendor is reached through one of two wire protocols. The family is
//! chosen once per generation by the dispatcher; adapters never fail past
//! their boundary.

use crate::config::{ProviderKind, ResolvedProvider};
use crate::http::HttpClient;
use crate::protocol::{GenerationRequest, GenerationResult};
use crate::providers::gemini::GeminiAdapter;
use crate::providers::openai::OpenAiAdapter;
use crate::providers::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};
use uuid::Uuid;

/// Sampling temperature sent to every vendor
pub const TEMPERATURE: f32 = 0.7;

/// Output token budget per unit of the requested maximum length
pub const TOKEN_BUDGET_MULTIPLIER: u32 = 2;

/// Output token budget for a maximum message length
pub fn token_budget(max_length: u32) -> u32 {
    max_length.saturating_mul(TOKEN_BUDGET_MULTIPLIER)
}

/// Core trait implemented by each adapter family
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Adapter family name, used in logs
    fn name(&self) -> &str;

    /// Model the adapter sends requests to
    fn model(&self) -> &str;

    /// Send one request and extract the message text
    async fn complete(&self, request: &GenerationRequest, request_id: Uuid) -> ProviderResult<String>;

    /// Run one generation, folding every failure into the result
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        let request_id = Uuid::new_v4();
        info!(
            "Generating with {} adapter, model {} [request_id: {}]",
            self.name(),
            self.model(),
            request_id
        );

        match self.complete(request, request_id).await {
            Ok(content) => {
                info!("Generation succeeded [request_id: {}]", request_id);
                GenerationResult::success(content)
            }
            Err(e) => {
                warn!("Generation failed [request_id: {}]: {}", request_id, e);
                GenerationResult::failure(e.to_string())
            }
        }
    }
}

/// Wire protocol family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// `generateContent` with a query-string key
    Gemini,
    /// `/v1/chat/completions` with a bearer key
    OpenAiCompatible,
}

impl AdapterKind {
    /// Family used for a (catalog-effective) provider
    pub fn for_provider(provider: ProviderKind) -> Self {
        match provider {
            ProviderKind::Google => AdapterKind::Gemini,
            ProviderKind::OpenAI | ProviderKind::Anthropic | ProviderKind::Custom => {
                AdapterKind::OpenAiCompatible
            }
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterKind::Gemini => write!(f, "gemini"),
            AdapterKind::OpenAiCompatible => write!(f, "openai-compatible"),
        }
    }
}

/// A ready-to-call adapter of either family
#[derive(Debug, Clone)]
pub enum Adapter {
    Gemini(GeminiAdapter),
    OpenAiCompatible(OpenAiAdapter),
}

impl Adapter {
    /// Build the adapter of the given family for a resolved provider
    pub fn new(kind: AdapterKind, resolved: &ResolvedProvider, http: HttpClient) -> Self {
        match kind {
            AdapterKind::Gemini => Adapter::Gemini(GeminiAdapter::new(resolved, http)),
            AdapterKind::OpenAiCompatible => {
                Adapter::OpenAiCompatible(OpenAiAdapter::new(resolved, http))
            }
        }
    }

    pub fn kind(&self) -> AdapterKind {
        match self {
            Adapter::Gemini(_) => AdapterKind::Gemini,
            Adapter::OpenAiCompatible(_) => AdapterKind::OpenAiCompatible,
        }
    }

    fn inner(&self) -> &dyn ProviderAdapter {
        match self {
            Adapter::Gemini(adapter) => adapter,
            Adapter::OpenAiCompatible(adapter) => adapter,
        }
    }

    /// Run one generation; never fails
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.inner().generate(request).await
    }
}
