//! Configuration schema structures with serde support

use super::error::ValidationError;
use super::secrets::{SafeLogging, SecretString};
use crate::catalog;
use crate::protocol::Language;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default lower length bound
pub const DEFAULT_MIN_LENGTH: u32 = 20;

/// Default upper length bound
pub const DEFAULT_MAX_LENGTH: u32 = 45;

/// Supported provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    OpenAI,
    Anthropic,
    Custom,
}

impl ProviderKind {
    /// Every provider, in the order the settings form lists them
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Google,
        ProviderKind::OpenAI,
        ProviderKind::Anthropic,
        ProviderKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "openai" => Ok(ProviderKind::OpenAI),
            "anthropic" => Ok(ProviderKind::Anthropic),
            "custom" => Ok(ProviderKind::Custom),
            other => Err(ValidationError::invalid_value(
                "provider",
                "one of google, openai, anthropic, custom",
                other,
            )),
        }
    }
}

/// User-supplied provider settings, persisted across sessions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "StoredProviderConfig", into = "StoredProviderConfig")]
pub struct ProviderConfig {
    /// Selected provider; `Custom` when the record names one this build does not know
    pub provider: ProviderKind,

    /// Provider name as stored, kept only when it is not a known provider
    pub unrecognized_provider: Option<String>,

    /// Base URL; only consulted for custom providers
    pub base_url: String,

    /// API key (supports `${VAR}` interpolation when loaded)
    pub api_key: SecretString,

    /// Model identifier
    pub model: String,

    /// Lower length bound for generated messages
    pub min_length: u32,

    /// Upper length bound for generated messages
    pub max_length: u32,

    /// Preferred output language
    pub language: Language,
}

/// Persisted shape of [`ProviderConfig`], with the provider as free text
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoredProviderConfig {
    provider: String,

    #[serde(default)]
    base_url: String,

    #[serde(default)]
    api_key: SecretString,

    model: String,

    #[serde(default = "default_min_length")]
    min_length: u32,

    #[serde(default = "default_max_length")]
    max_length: u32,

    #[serde(default)]
    language: Language,
}

impl From<StoredProviderConfig> for ProviderConfig {
    fn from(stored: StoredProviderConfig) -> Self {
        let (provider, unrecognized_provider) = match stored.provider.parse::<ProviderKind>() {
            Ok(kind) => (kind, None),
            Err(_) => (ProviderKind::Custom, Some(stored.provider)),
        };
        Self {
            provider,
            unrecognized_provider,
            base_url: stored.base_url,
            api_key: stored.api_key,
            model: stored.model,
            min_length: stored.min_length,
            max_length: stored.max_length,
            language: stored.language,
        }
    }
}

impl From<ProviderConfig> for StoredProviderConfig {
    fn from(config: ProviderConfig) -> Self {
        Self {
            provider: config
                .unrecognized_provider
                .unwrap_or_else(|| config.provider.as_str().to_string()),
            base_url: config.base_url,
            api_key: config.api_key,
            model: config.model,
            min_length: config.min_length,
            max_length: config.max_length,
            language: config.language,
        }
    }
}

impl ProviderConfig {
    /// First-run settings derived from the deployment defaults
    pub fn default_for(deployment: &DeploymentConfig) -> Self {
        let provider = deployment.default_provider;
        Self {
            provider,
            unrecognized_provider: None,
            base_url: deployment
                .default_base_url(provider)
                .unwrap_or_default()
                .to_string(),
            api_key: SecretString::default(),
            model: deployment.default_model.clone(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            language: Language::default(),
        }
    }

    /// Switch provider, resetting the base URL and model the way the settings form does
    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        if provider != self.provider {
            self.model = catalog::default_model(provider).id.to_string();
        }
        // Only a custom provider that stays custom keeps its URL
        if provider != self.provider || provider != ProviderKind::Custom {
            self.base_url.clear();
        }
        self.provider = provider;
        self.unrecognized_provider = None;
        self
    }

    /// Provider name as the user wrote it
    pub fn provider_name(&self) -> &str {
        self.unrecognized_provider
            .as_deref()
            .unwrap_or_else(|| self.provider.as_str())
    }

    /// Validate the configuration against the deployment defaults
    pub fn validate(&self, deployment: &DeploymentConfig) -> Result<(), ValidationError> {
        if self.provider == ProviderKind::Custom {
            if self.base_url.trim().is_empty() {
                return Err(ValidationError::required("base_url")
                    .with_context("A custom provider needs an API base URL"));
            }
            validate_url("base_url", &self.base_url)?;
        }

        if self.api_key.is_empty() && deployment.default_api_key(self.provider).is_none() {
            return Err(ValidationError::required("api_key"));
        }

        if self.model.trim().is_empty() {
            return Err(ValidationError::required("model"));
        }

        if self.provider != ProviderKind::Custom
            && catalog::find_model(self.provider, &self.model).is_none()
        {
            return Err(ValidationError::invalid_value(
                "model",
                format!("a model advertised for {}", self.provider),
                self.model.clone(),
            ));
        }

        ValidationError::check_length_bounds(self.min_length, self.max_length)?;

        Ok(())
    }

    /// Resolve the effective endpoint and credentials for one request
    pub fn resolve(&self, deployment: &DeploymentConfig) -> Result<ResolvedProvider, ValidationError> {
        self.validate(deployment)?;

        let base_url = match self.provider {
            ProviderKind::Custom => self.base_url.trim().to_string(),
            other => deployment
                .default_base_url(other)
                .map(str::to_string)
                .ok_or_else(|| {
                    ValidationError::required(format!("deployment.base_urls.{}", other))
                })?,
        };
        validate_url("base_url", &base_url)?;

        let api_key = if self.api_key.is_empty() {
            deployment
                .default_api_key(self.provider)
                .cloned()
                .ok_or_else(|| ValidationError::required("api_key"))?
        } else {
            self.api_key.clone()
        };

        Ok(ResolvedProvider {
            provider: self.provider,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: self.model.trim().to_string(),
        })
    }
}

impl SafeLogging for ProviderConfig {
    fn safe_for_logging(&self) -> String {
        format!(
            "provider={} base_url={} api_key={} model={} length={}..={} language={}",
            self.provider_name(),
            if self.base_url.is_empty() { "(default)" } else { self.base_url.as_str() },
            self.api_key.partial_redact(),
            self.model,
            self.min_length,
            self.max_length,
            self.language,
        )
    }
}

/// Validated provider settings, ready for an adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    /// Provider as selected by the user (before catalog routing)
    pub provider: ProviderKind,
    /// Base URL without a trailing slash
    pub base_url: String,
    /// API key, possibly the deployment default
    pub api_key: SecretString,
    /// Model identifier
    pub model: String,
}

/// Per-vendor default base URLs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BaseUrls {
    #[serde(default = "default_openai_base_url")]
    pub openai: String,

    #[serde(default = "default_anthropic_base_url")]
    pub anthropic: String,

    #[serde(default = "default_google_base_url")]
    pub google: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            openai: default_openai_base_url(),
            anthropic: default_anthropic_base_url(),
            google: default_google_base_url(),
        }
    }
}

/// Operator-supplied defaults shared by every user of a deployment
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    /// Default base URL per vendor
    #[serde(default)]
    pub base_urls: BaseUrls,

    /// API key used for Google when the user leaves theirs empty
    #[serde(default)]
    pub google_api_key: Option<SecretString>,

    /// Provider preselected on first run
    #[serde(default = "default_provider")]
    pub default_provider: ProviderKind,

    /// Model preselected on first run
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Optional whole-request timeout; unset means the HTTP client default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            base_urls: BaseUrls::default(),
            google_api_key: None,
            default_provider: default_provider(),
            default_model: default_model(),
            request_timeout_secs: None,
        }
    }
}

impl DeploymentConfig {
    /// Default base URL for a vendor; custom providers have none
    pub fn default_base_url(&self, provider: ProviderKind) -> Option<&str> {
        match provider {
            ProviderKind::OpenAI => Some(&self.base_urls.openai),
            ProviderKind::Anthropic => Some(&self.base_urls.anthropic),
            ProviderKind::Google => Some(&self.base_urls.google),
            ProviderKind::Custom => None,
        }
    }

    /// Deployment-supplied API key for a vendor, if any
    pub fn default_api_key(&self, provider: ProviderKind) -> Option<&SecretString> {
        match provider {
            ProviderKind::Google => self.google_api_key.as_ref().filter(|k| !k.is_empty()),
            _ => None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the deployment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_url("base_urls.openai", &self.base_urls.openai)?;
        validate_url("base_urls.anthropic", &self.base_urls.anthropic)?;
        validate_url("base_urls.google", &self.base_urls.google)?;

        if self.default_model.trim().is_empty() {
            return Err(ValidationError::required("default_model"));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ValidationError::not_positive("request_timeout_secs"));
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ValidationError> {
    match url::Url::parse(value.trim()) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        Ok(url) => Err(ValidationError::invalid_url(
            field,
            format!("URL scheme must be http or https, got: {}", url.scheme()),
        )),
        Err(e) => Err(ValidationError::invalid_url(field, e.to_string())),
    }
}

// Default value functions for serde
fn default_min_length() -> u32 { DEFAULT_MIN_LENGTH }
fn default_max_length() -> u32 { DEFAULT_MAX_LENGTH }
fn default_provider() -> ProviderKind { ProviderKind::Google }
fn default_model() -> String { "gemini-1.5-pro".to_string() }
fn default_openai_base_url() -> String { "https://api.openai.com".to_string() }
fn default_anthropic_base_url() -> String { "https://api.anthropic.com".to_string() }
fn default_google_base_url() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
