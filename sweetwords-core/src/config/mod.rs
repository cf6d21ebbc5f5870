//! Configuration module for Sweet Words
//!
//! This module provides the provider settings schema, its validation and
//! persistence, and the deployment defaults that fill in what the user leaves
//! empty.

mod env;
mod error;
mod schema;
mod secrets;
mod store;
mod validator;

pub use env::{
    apply_env_overrides, apply_env_overrides_with, interpolate_env_vars,
    interpolate_env_vars_with, ANTHROPIC_BASE_URL_VAR, DEFAULT_MODEL_VAR,
    DEFAULT_PROVIDER_VAR, GOOGLE_API_KEY_VAR, GOOGLE_BASE_URL_VAR, OPENAI_BASE_URL_VAR,
};
pub use error::{ConfigError, ConfigResult, ValidationError, ValidationErrorKind};
pub use schema::{
    BaseUrls, DeploymentConfig, ProviderConfig, ProviderKind, ResolvedProvider,
    DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};
pub use secrets::{SafeLogging, SecretString};
pub use store::{ConfigStore, STORAGE_KEY};
pub use validator::ConfigValidator;

use std::fs;
use std::path::Path;

/// Load deployment defaults from a YAML file
pub fn load_deployment_from_yaml<P: AsRef<Path>>(path: P) -> ConfigResult<DeploymentConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;

    // Interpolate environment variables before parsing
    let interpolated = env::interpolate_env_vars(&content)?;

    let config: DeploymentConfig =
        serde_yaml::from_str(&interpolated).map_err(|e| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            line: e.location().map(|l| l.line()),
            column: e.location().map(|l| l.column()),
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}

/// Load deployment defaults: built-ins, then an optional YAML file, then `SWEETWORDS_*` variables
pub fn load_deployment(path: Option<&Path>) -> ConfigResult<DeploymentConfig> {
    let mut config = match path {
        Some(path) => load_deployment_from_yaml(path)?,
        None => DeploymentConfig::default(),
    };

    env::apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deployment_yaml() {
        let yaml = r#"
base_urls:
  openai: https://proxy.example.com
google_api_key: AIza-deploy
default_provider: openai
default_model: gpt-4o
"#;
        let config: DeploymentConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.base_urls.openai, "https://proxy.example.com");
        assert_eq!(
            config.base_urls.google,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.default_provider, ProviderKind::OpenAI);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_unknown_deployment_field_rejected() {
        let yaml = "retry_policy: {}\n";
        assert!(serde_yaml::from_str::<DeploymentConfig>(yaml).is_err());
    }
}
