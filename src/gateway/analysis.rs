//! AnalysisGateway - dispatches requests to the provider registry

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::info;

use crate::model::ModelRegistry;
use crate::providers::ProviderRegistry;
use crate::types::{AnalysisType, Language};
use crate::{
    ContentOptimizationRequest, ContentOptimizationResponse, HealthResponse, ModelsResponse,
    Result, TextAnalysisRequest, TextAnalysisResponse, TextGateway,
};

/// Status reported by [`TextGateway::health`].
pub const HEALTHY: &str = "healthy";

/// Gateway over a provider registry and the startup model registry.
pub struct AnalysisGateway {
    providers: ProviderRegistry,
    models: Arc<ModelRegistry>,
    version: String,
}

impl AnalysisGateway {
    pub(crate) fn new(providers: ProviderRegistry, models: Arc<ModelRegistry>, version: String) -> Self {
        Self {
            providers,
            models,
            version,
        }
    }

    /// The provider registry requests are dispatched to.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// The models loaded at startup.
    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }
}

#[async_trait]
impl TextGateway for AnalysisGateway {
    fn health(&self) -> HealthResponse {
        HealthResponse {
            status: HEALTHY.to_string(),
            version: self.version.clone(),
            models_loaded: self.models.names(),
        }
    }

    async fn analyze_text(&self, request: TextAnalysisRequest) -> Result<TextAnalysisResponse> {
        info!(
            analysis_type = %request.analysis_type,
            language = %request.language,
            "text analysis"
        );
        let start = Instant::now();

        let scored = self
            .providers
            .analyze(request.analysis_type, &request.text, request.language)
            .await?;

        Ok(TextAnalysisResponse {
            text: request.text,
            language: request.language,
            analysis_type: request.analysis_type,
            result: scored.value,
            confidence: scored.confidence,
            processing_time: start.elapsed().as_secs_f64(),
        })
    }

    async fn optimize_content(
        &self,
        request: ContentOptimizationRequest,
    ) -> Result<ContentOptimizationResponse> {
        info!(platform = %request.platform, "content optimization");
        let optimization = self.providers.optimize(&request).await?;
        Ok(ContentOptimizationResponse::new(request.content, optimization))
    }

    fn list_models(&self) -> ModelsResponse {
        ModelsResponse {
            models: self.models.names(),
            languages_supported: Language::ALL.iter().map(|l| l.to_string()).collect(),
            analysis_types: AnalysisType::ALL.iter().map(|t| t.to_string()).collect(),
        }
    }
}
