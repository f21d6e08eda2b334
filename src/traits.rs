//! Core TextGateway trait

use async_trait::async_trait;

use crate::{
    ContentOptimizationRequest, ContentOptimizationResponse, HealthResponse, ModelsResponse,
    Result, TextAnalysisRequest, TextAnalysisResponse,
};

/// The four operations exposed over HTTP.
///
/// The server only talks to this trait, so the dispatch behind it can
/// change without touching the HTTP layer.
#[async_trait]
pub trait TextGateway: Send + Sync {
    /// Service status and currently loaded models. Never fails.
    fn health(&self) -> HealthResponse;

    /// Run one text analysis.
    async fn analyze_text(&self, request: TextAnalysisRequest) -> Result<TextAnalysisResponse>;

    /// Produce platform-specific suggestions for a piece of content.
    async fn optimize_content(
        &self,
        request: ContentOptimizationRequest,
    ) -> Result<ContentOptimizationResponse>;

    /// Loaded models plus the supported languages and analysis types. Never fails.
    fn list_models(&self) -> ModelsResponse;
}
