//! Generation entry point
//!
//! Ties configuration, dispatch and the adapters together: validate the
//! provider configuration, pick the adapter family, run one request.

use crate::config::{ConfigError, ConfigValidator, DeploymentConfig, ProviderConfig};
use crate::http::HttpClient;
use crate::protocol::{GenerationRequest, GenerationResult};
use crate::providers::{Adapter, Dispatcher, ProviderResult};
use tracing::debug;

/// Produces messages from a stored provider configuration
#[derive(Debug, Clone)]
pub struct Generator {
    deployment: DeploymentConfig,
    validator: ConfigValidator,
    dispatcher: Dispatcher,
}

impl Generator {
    /// Create a generator with an HTTP client built from the deployment settings
    pub fn new(deployment: DeploymentConfig) -> ProviderResult<Self> {
        let http = HttpClient::with_timeout(deployment.request_timeout())?;
        Ok(Self::with_http_client(deployment, http))
    }

    /// Create a generator over an existing HTTP client
    pub fn with_http_client(deployment: DeploymentConfig, http: HttpClient) -> Self {
        Self {
            deployment,
            validator: ConfigValidator::new(),
            dispatcher: Dispatcher::new(http),
        }
    }

    /// Validate the configuration and build the adapter it routes to
    ///
    /// No network traffic happens here; an invalid configuration never
    /// reaches a vendor.
    pub fn prepare(&self, config: &ProviderConfig) -> Result<Adapter, ConfigError> {
        let resolved = self.validator.resolve(config, &self.deployment)?;
        debug!(
            "Resolved provider {} at {}",
            config.provider_name(),
            resolved.base_url
        );
        let adapter = match config.unrecognized_provider.as_deref() {
            Some(name) => self.dispatcher.dispatch_named(name, &resolved),
            None => self.dispatcher.dispatch(&resolved),
        };
        Ok(adapter)
    }

    /// Generate one message
    ///
    /// Configuration problems are returned as errors; everything that goes
    /// wrong once a request is in flight is reported inside the result.
    pub async fn generate(
        &self,
        config: &ProviderConfig,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ConfigError> {
        let adapter = self.prepare(config)?;
        Ok(adapter.generate(request).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderKind, SecretString};
    use crate::providers::AdapterKind;

    fn generator() -> Generator {
        Generator::new(DeploymentConfig::default()).unwrap()
    }

    #[test]
    fn test_prepare_routes_google_to_gemini() {
        let deployment = DeploymentConfig::default();
        let mut config = ProviderConfig::default_for(&deployment);
        config.api_key = SecretString::new("AIza-test");

        let adapter = generator().prepare(&config).unwrap();
        assert_eq!(adapter.kind(), AdapterKind::Gemini);
    }

    #[test]
    fn test_prepare_rejects_custom_without_base_url() {
        let deployment = DeploymentConfig::default();
        let mut config = ProviderConfig::default_for(&deployment).with_provider(ProviderKind::Custom);
        config.api_key = SecretString::new("k");

        let err = generator().prepare(&config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_prepare_routes_unknown_provider_to_openai_compatible() {
        let mut config = ProviderConfig::default_for(&DeploymentConfig::default())
            .with_provider(ProviderKind::Custom);
        config.unrecognized_provider = Some("mistral".to_string());
        config.base_url = "https://api.mistral.ai".to_string();
        config.model = "mistral-large".to_string();
        config.api_key = SecretString::new("k");

        let adapter = generator().prepare(&config).unwrap();
        assert_eq!(adapter.kind(), AdapterKind::OpenAiCompatible);
    }
}
