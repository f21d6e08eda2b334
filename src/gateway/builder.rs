//! Builder for configuring gateway instances

use std::sync::Arc;

use super::AnalysisGateway;
use crate::model::ModelRegistry;
use crate::providers::ProviderRegistry;
use crate::types::AnalysisType;
use crate::version::PKG_VERSION;
use crate::{GatewayError, Result};

/// Main entry point for creating gateway instances.
pub struct Gateway;

impl Gateway {
    /// Create a new builder for configuring the gateway.
    pub fn builder() -> GatewayBuilder {
        GatewayBuilder::new()
    }
}

/// Builder for configuring gateway instances.
pub struct GatewayBuilder {
    providers: Option<ProviderRegistry>,
    models: Arc<ModelRegistry>,
    version: String,
    allow_partial: bool,
}

impl Default for GatewayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayBuilder {
    pub fn new() -> Self {
        Self {
            providers: None,
            models: Arc::new(ModelRegistry::empty()),
            version: PKG_VERSION.to_string(),
            allow_partial: false,
        }
    }

    /// Use this provider registry instead of the placeholder providers.
    pub fn providers(mut self, providers: ProviderRegistry) -> Self {
        self.providers = Some(providers);
        self
    }

    /// Models loaded by the startup hook.
    pub fn models(mut self, models: impl Into<Arc<ModelRegistry>>) -> Self {
        self.models = models.into();
        self
    }

    /// Override the version string reported by `health`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Accept a provider registry that does not cover every analysis type.
    ///
    /// Requests for an uncovered type then fail with `NoProvider`.
    pub fn allow_partial(mut self) -> Self {
        self.allow_partial = true;
        self
    }

    /// Build the gateway.
    ///
    /// Without an explicit registry, every analysis type and platform is
    /// served by the placeholder providers.
    pub fn build(self) -> Result<AnalysisGateway> {
        let providers = self
            .providers
            .unwrap_or_else(ProviderRegistry::with_placeholders);

        if !self.allow_partial {
            let missing: Vec<&str> = AnalysisType::ALL
                .iter()
                .filter(|kind| !providers.supports(**kind))
                .map(|kind| kind.as_str())
                .collect();
            if !missing.is_empty() {
                return Err(GatewayError::Configuration(format!(
                    "no provider registered for: {}",
                    missing.join(", ")
                )));
            }
        }

        Ok(AnalysisGateway::new(providers, self.models, self.version))
    }
}
