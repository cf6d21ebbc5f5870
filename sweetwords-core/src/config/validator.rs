//! Configuration validation utilities

use super::env::first_placeholder;
use super::error::{ValidationError, ValidationErrorKind};
use super::schema::{DeploymentConfig, ProviderConfig, ResolvedProvider};

/// Validator applied before any request leaves the process
#[derive(Debug, Clone, Default)]
pub struct ConfigValidator {
    _private: (),
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a configuration with extended rules
    pub fn validate(
        &self,
        config: &ProviderConfig,
        deployment: &DeploymentConfig,
    ) -> Result<(), ValidationError> {
        // Placeholders first, so an unset variable is reported as such rather
        // than as a malformed URL
        self.validate_placeholders(config)?;
        config.validate(deployment)?;
        Ok(())
    }

    /// Validate and resolve in one step
    pub fn resolve(
        &self,
        config: &ProviderConfig,
        deployment: &DeploymentConfig,
    ) -> Result<ResolvedProvider, ValidationError> {
        self.validate_placeholders(config)?;
        config.resolve(deployment)
    }

    /// Reject `${VAR}` placeholders that survived interpolation
    fn validate_placeholders(&self, config: &ProviderConfig) -> Result<(), ValidationError> {
        if let Some(placeholder) = first_placeholder(config.api_key.expose_secret()) {
            return Err(ValidationError::unresolved_placeholder("api_key", placeholder));
        }

        if let Some(placeholder) = first_placeholder(&config.base_url) {
            return Err(ValidationError::unresolved_placeholder("base_url", placeholder));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderKind, SecretString};
    use crate::protocol::Language;

    fn config() -> ProviderConfig {
        ProviderConfig {
            provider: ProviderKind::Anthropic,
            unrecognized_provider: None,
            base_url: String::new(),
            api_key: SecretString::new("key"),
            model: "claude-2.1".to_string(),
            min_length: 20,
            max_length: 45,
            language: Language::En,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let validator = ConfigValidator::new();
        assert!(validator.validate(&config(), &DeploymentConfig::default()).is_ok());
    }

    #[test]
    fn test_unresolved_placeholder_rejected() {
        let validator = ConfigValidator::new();
        let mut config = config();
        config.api_key = SecretString::new("${ANTHROPIC_API_KEY}");

        let err = validator
            .validate(&config, &DeploymentConfig::default())
            .unwrap_err();
        assert_eq!(err.field_path, "api_key");
        assert!(matches!(
            err.kind,
            ValidationErrorKind::UnresolvedPlaceholder { ref placeholder } if placeholder == "${ANTHROPIC_API_KEY}"
        ));
    }

    #[test]
    fn test_resolve_anthropic_default_url() {
        let resolved = ConfigValidator::new()
            .resolve(&config(), &DeploymentConfig::default())
            .unwrap();
        assert_eq!(resolved.base_url, "https://api.anthropic.com");
    }
}
