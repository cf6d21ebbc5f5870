//! Model catalog
//!
//! The models advertised for each provider. A custom provider may name any
//! model, but it is offered the union of every vendor catalog so that picking a
//! known model still routes to that vendor's prompt logic.

use crate::config::ProviderKind;
use serde::Serialize;

/// A model advertised to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelOption {
    /// Identifier sent to the vendor API
    pub id: &'static str,
    /// Human-readable label
    pub name: &'static str,
    /// Vendor family that serves this model
    pub provider: ProviderKind,
    /// Context window size
    pub max_tokens: u32,
}

const fn model(
    id: &'static str,
    name: &'static str,
    provider: ProviderKind,
    max_tokens: u32,
) -> ModelOption {
    ModelOption {
        id,
        name,
        provider,
        max_tokens,
    }
}

static OPENAI_MODELS: [ModelOption; 8] = [
    model("gpt-4o-latest", "GPT-4 Turbo (Latest)", ProviderKind::OpenAI, 128_000),
    model("gpt-4o", "GPT-4 Turbo", ProviderKind::OpenAI, 128_000),
    model("gpt-4-1106-preview", "GPT-4 Turbo (1106)", ProviderKind::OpenAI, 4_096),
    model("gpt-4", "GPT-4", ProviderKind::OpenAI, 8_192),
    model("gpt-4-32k", "GPT-4 (32k)", ProviderKind::OpenAI, 32_768),
    model("gpt-3.5-turbo-1106", "GPT-3.5 Turbo (Latest)", ProviderKind::OpenAI, 4_096),
    model("gpt-3.5-turbo", "GPT-3.5 Turbo", ProviderKind::OpenAI, 4_096),
    model("gpt-3.5-turbo-16k", "GPT-3.5 Turbo (16k)", ProviderKind::OpenAI, 16_384),
];

static ANTHROPIC_MODELS: [ModelOption; 5] = [
    model("claude-3-5-sonnet", "Claude 3 Sonnet", ProviderKind::Anthropic, 200_000),
    model("claude-3-5-haiku", "Claude 3 Haiku", ProviderKind::Anthropic, 200_000),
    model("claude-2.1", "Claude 2.1", ProviderKind::Anthropic, 200_000),
    model("claude-2.0", "Claude 2.0", ProviderKind::Anthropic, 100_000),
    model("claude-instant-1.2", "Claude Instant", ProviderKind::Anthropic, 100_000),
];

static GOOGLE_MODELS: [ModelOption; 5] = [
    model("gemini-2.0-flash-exp", "Gemini 2.0 Flash (Experimental)", ProviderKind::Google, 128_000),
    model("gemini-1.5-pro", "Gemini 1.5 Pro", ProviderKind::Google, 128_000),
    model("gemini-pro", "Gemini Pro", ProviderKind::Google, 32_768),
    model("gemini-ultra", "Gemini Ultra", ProviderKind::Google, 32_768),
    model("palm-2", "PaLM 2", ProviderKind::Google, 8_192),
];

static CUSTOM_MODELS: [ModelOption; 1] = [model(
    "custom-model",
    "Custom Model",
    ProviderKind::Custom,
    32_768,
)];

/// Models declared by a provider's own catalog
pub fn declared_models(provider: ProviderKind) -> &'static [ModelOption] {
    match provider {
        ProviderKind::OpenAI => &OPENAI_MODELS,
        ProviderKind::Anthropic => &ANTHROPIC_MODELS,
        ProviderKind::Google => &GOOGLE_MODELS,
        ProviderKind::Custom => &CUSTOM_MODELS,
    }
}

/// Models offered when the given provider is selected
pub fn available_models(provider: ProviderKind) -> Vec<&'static ModelOption> {
    match provider {
        ProviderKind::Custom => OPENAI_MODELS
            .iter()
            .chain(ANTHROPIC_MODELS.iter())
            .chain(GOOGLE_MODELS.iter())
            .chain(CUSTOM_MODELS.iter())
            .collect(),
        other => declared_models(other).iter().collect(),
    }
}

/// Look up a model among those offered for `provider`
pub fn find_model(provider: ProviderKind, model_id: &str) -> Option<&'static ModelOption> {
    available_models(provider)
        .into_iter()
        .find(|option| option.id == model_id)
}

/// First model offered for a provider, used when the provider changes
pub fn default_model(provider: ProviderKind) -> &'static ModelOption {
    &declared_models(provider)[0]
}
