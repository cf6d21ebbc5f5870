//! Environment variable handling for configuration
//!
//! Two concerns live here: `${VAR}` interpolation inside persisted or
//! file-based configuration, and `SWEETWORDS_*` overrides of the deployment
//! defaults.

use super::error::ConfigError;
use super::schema::{DeploymentConfig, ProviderConfig, ProviderKind};
use super::secrets::SecretString;
use regex::Regex;
use std::env;
use std::sync::LazyLock;
use tracing::warn;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env var pattern is a valid regex")
});

pub const OPENAI_BASE_URL_VAR: &str = "SWEETWORDS_OPENAI_BASE_URL";
pub const ANTHROPIC_BASE_URL_VAR: &str = "SWEETWORDS_ANTHROPIC_BASE_URL";
pub const GOOGLE_BASE_URL_VAR: &str = "SWEETWORDS_GOOGLE_BASE_URL";
pub const GOOGLE_API_KEY_VAR: &str = "SWEETWORDS_GOOGLE_API_KEY";
pub const DEFAULT_PROVIDER_VAR: &str = "SWEETWORDS_DEFAULT_PROVIDER";
pub const DEFAULT_MODEL_VAR: &str = "SWEETWORDS_DEFAULT_MODEL";

/// Whether a value still carries a `${VAR}` placeholder
pub fn has_placeholder(value: &str) -> bool {
    ENV_VAR_PATTERN.is_match(value)
}

/// First `${VAR}` placeholder in a value, if any
pub fn first_placeholder(value: &str) -> Option<String> {
    ENV_VAR_PATTERN
        .find(value)
        .map(|m| m.as_str().to_string())
}

/// Interpolate environment variables in a configuration string
pub fn interpolate_env_vars(content: &str) -> Result<String, ConfigError> {
    interpolate_env_vars_with(content, |name| env::var(name).ok())
}

/// Interpolate `${VAR}` placeholders using `lookup` to resolve each name
pub fn interpolate_env_vars_with(
    content: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, ConfigError> {
    let mut missing = None;

    let result = ENV_VAR_PATTERN.replace_all(content, |cap: &regex::Captures<'_>| {
        match lookup(&cap[1]) {
            Some(value) => value,
            None => {
                missing.get_or_insert_with(|| cap[1].to_string());
                cap[0].to_string()
            }
        }
    });

    // Report the first missing variable
    if let Some(var) = missing {
        return Err(ConfigError::MissingEnvVar { var });
    }

    Ok(result.into_owned())
}

/// Interpolate environment variables in the secret-bearing fields of a loaded record
pub fn interpolate_config_env_vars(config: &mut ProviderConfig) -> Result<(), ConfigError> {
    let api_key = config.api_key.expose_secret();
    if has_placeholder(api_key) {
        config.api_key = SecretString::new(interpolate_env_vars(api_key)?);
    }

    if has_placeholder(&config.base_url) {
        config.base_url = interpolate_env_vars(&config.base_url)?;
    }

    Ok(())
}

/// Apply `SWEETWORDS_*` environment overrides on top of a deployment config
pub fn apply_env_overrides(deployment: &mut DeploymentConfig) {
    apply_env_overrides_with(deployment, |name| env::var(name).ok());
}

/// Apply `SWEETWORDS_*` overrides, resolving each variable through `lookup`
pub fn apply_env_overrides_with(
    deployment: &mut DeploymentConfig,
    lookup: impl Fn(&str) -> Option<String>,
) {
    let non_empty_var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty_var(OPENAI_BASE_URL_VAR) {
        deployment.base_urls.openai = url;
    }
    if let Some(url) = non_empty_var(ANTHROPIC_BASE_URL_VAR) {
        deployment.base_urls.anthropic = url;
    }
    if let Some(url) = non_empty_var(GOOGLE_BASE_URL_VAR) {
        deployment.base_urls.google = url;
    }
    if let Some(key) = non_empty_var(GOOGLE_API_KEY_VAR) {
        deployment.google_api_key = Some(SecretString::new(key));
    }
    if let Some(provider) = non_empty_var(DEFAULT_PROVIDER_VAR) {
        match provider.parse::<ProviderKind>() {
            Ok(provider) => deployment.default_provider = provider,
            Err(e) => warn!("Ignoring {}: {}", DEFAULT_PROVIDER_VAR, e),
        }
    }
    if let Some(model) = non_empty_var(DEFAULT_MODEL_VAR) {
        deployment.default_model = model;
    }
}
