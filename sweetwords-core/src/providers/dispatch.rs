//! Adapter selection
//!
//! The catalog entry for the configured model decides the family; the
//! configured provider only matters when the model is not in the catalog.

use crate::catalog;
use crate::config::{ProviderKind, ResolvedProvider};
use crate::http::HttpClient;
use crate::providers::adapter::{Adapter, AdapterKind};
use tracing::{debug, warn};

/// Provider after the catalog override
pub fn effective_provider(provider: ProviderKind, model: &str) -> ProviderKind {
    catalog::find_model(provider, model)
        .map(|option| option.provider)
        .unwrap_or(provider)
}

/// Adapter family for a provider/model pair
pub fn route(provider: ProviderKind, model: &str) -> AdapterKind {
    AdapterKind::for_provider(effective_provider(provider, model))
}

/// Adapter family for a provider given as free text
///
/// Unrecognized providers fall back to the OpenAI-compatible family.
pub fn route_raw(provider: &str, model: &str) -> AdapterKind {
    match provider.parse::<ProviderKind>() {
        Ok(kind) => route(kind, model),
        Err(_) => {
            warn!(
                "Unknown provider '{}', using the OpenAI-compatible adapter",
                provider
            );
            AdapterKind::OpenAiCompatible
        }
    }
}

/// Builds adapters over a shared HTTP client
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: HttpClient,
}

impl Dispatcher {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Select and build the adapter for a resolved provider
    pub fn dispatch(&self, resolved: &ResolvedProvider) -> Adapter {
        let kind = route(resolved.provider, &resolved.model);
        debug!(
            "Routing provider {} model {} to {} adapter",
            resolved.provider, resolved.model, kind
        );
        Adapter::new(kind, resolved, self.http.clone())
    }

    /// Select and build the adapter for a provider known only by name
    pub fn dispatch_named(&self, provider: &str, resolved: &ResolvedProvider) -> Adapter {
        let kind = route_raw(provider, &resolved.model);
        debug!(
            "Routing provider {} model {} to {} adapter",
            provider, resolved.model, kind
        );
        Adapter::new(kind, resolved, self.http.clone())
    }
}
