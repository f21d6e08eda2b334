//! Provider registry with fallback chain semantics.
//!
//! The `ProviderRegistry` stores analysis providers in priority order
//! (index 0 = highest). When an analysis is requested, it tries providers
//! in order until one succeeds or returns a non-fallback error.
//!
//! Content optimizers are not chained: each platform maps to exactly one
//! optimizer, and platforms without one use the generic optimizer.
//!
//! # Fallback Triggers
//!
//! The registry falls through to the next provider only on
//! `ModelNotAvailable`. Every other error is terminal and stops the chain.
//!
//! ```text
//! gateway.analyze_text(sentiment, "mg")
//!                     │
//!                     ▼
//!         ┌─────────────────────┐
//!         │  ProviderRegistry   │
//!         │  sentiment chain    │
//!         └─────────┬───────────┘
//!                   │ try in order
//!                   ▼
//!         ┌─────────────────────┐
//!         │  provider 0 (fr)    │ ──► language unsupported: ModelNotAvailable
//!         └─────────┬───────────┘
//!                   ▼
//!         ┌─────────────────────┐
//!         │  provider 1 (fr,mg) │ ──► returns result
//!         └─────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument};

use super::fixed::{FixedClassifyProvider, FixedKeywordProvider, FixedSentimentProvider};
use super::optimizers::SuggestionOptimizer;
use super::traits::{ClassifyProvider, ContentOptimizer, KeywordProvider, Scored, SentimentProvider};
use crate::telemetry;
use crate::types::{
    AnalysisResult, AnalysisType, ClassificationResult, ContentOptimizationRequest, KeywordsResult,
    Language, Optimization, Platform, SentimentResult,
};
use crate::{GatewayError, Result};

/// Registry of providers with fallback chain semantics.
///
/// Providers are stored in priority order (index 0 = highest priority).
#[derive(Default)]
pub struct ProviderRegistry {
    sentiment: Vec<Arc<dyn SentimentProvider>>,
    classify: Vec<Arc<dyn ClassifyProvider>>,
    keywords: Vec<Arc<dyn KeywordProvider>>,
    optimizers: HashMap<Platform, Arc<dyn ContentOptimizer>>,
    generic_optimizer: Option<Arc<dyn ContentOptimizer>>,
}

/// Registered provider names per capability (in priority order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderNames {
    pub sentiment: Vec<String>,
    pub classify: Vec<String>,
    pub keywords: Vec<String>,
    /// `(platform, optimizer)` pairs, sorted by platform.
    pub optimizers: Vec<(String, String)>,
    pub generic_optimizer: Option<String>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry wired with the placeholder providers for every analysis
    /// type and the facebook, instagram and generic optimizers.
    pub fn with_placeholders() -> Self {
        let mut registry = Self::new();
        registry.add_sentiment(Arc::new(FixedSentimentProvider::new()));
        registry.add_classify(Arc::new(FixedClassifyProvider::new()));
        registry.add_keywords(Arc::new(FixedKeywordProvider::new()));
        registry.set_optimizer(Platform::Facebook, Arc::new(SuggestionOptimizer::facebook()));
        registry.set_optimizer(Platform::Instagram, Arc::new(SuggestionOptimizer::instagram()));
        registry.set_generic_optimizer(Arc::new(SuggestionOptimizer::generic()));
        registry
    }

    // ========================================================================
    // Registration methods (appends to end = lowest priority)
    // Call in priority order: first registered = highest priority
    // ========================================================================

    /// Add a sentiment provider (appended to end of chain).
    pub fn add_sentiment(&mut self, provider: Arc<dyn SentimentProvider>) {
        self.sentiment.push(provider);
    }

    /// Add a classification provider (appended to end of chain).
    pub fn add_classify(&mut self, provider: Arc<dyn ClassifyProvider>) {
        self.classify.push(provider);
    }

    /// Add a keyword provider (appended to end of chain).
    pub fn add_keywords(&mut self, provider: Arc<dyn KeywordProvider>) {
        self.keywords.push(provider);
    }

    /// Set the optimizer for one platform, replacing any previous one.
    pub fn set_optimizer(&mut self, platform: Platform, optimizer: Arc<dyn ContentOptimizer>) {
        self.optimizers.insert(platform, optimizer);
    }

    /// Set the optimizer used for platforms without a dedicated one.
    pub fn set_generic_optimizer(&mut self, optimizer: Arc<dyn ContentOptimizer>) {
        self.generic_optimizer = Some(optimizer);
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run the analysis selected by `kind` through its provider chain.
    pub async fn analyze(
        &self,
        kind: AnalysisType,
        text: &str,
        language: Language,
    ) -> Result<Scored<AnalysisResult>> {
        match kind {
            AnalysisType::Sentiment => Ok(self
                .sentiment(text, language)
                .await?
                .map(AnalysisResult::Sentiment)),
            AnalysisType::Classification => Ok(self
                .classify(text, language)
                .await?
                .map(AnalysisResult::Classification)),
            AnalysisType::Keywords => Ok(self
                .keywords(text, language)
                .await?
                .map(AnalysisResult::Keywords)),
        }
    }

    /// Sentiment analysis using the fallback chain.
    #[instrument(skip(self, text), fields(operation = "sentiment"))]
    pub async fn sentiment(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Scored<SentimentResult>> {
        let start = Instant::now();
        let mut last_err = None;
        for provider in &self.sentiment {
            match provider.analyze_sentiment(text, language).await {
                Ok(result) => {
                    Self::record_request("sentiment", provider.name(), start, true);
                    return Ok(result);
                }
                Err(e) if Self::is_fallback_trigger(&e) => {
                    debug!(provider = provider.name(), "provider unavailable, falling back");
                    last_err = Some(e);
                    continue;
                }
                Err(e) => {
                    Self::record_request("sentiment", provider.name(), start, false);
                    return Err(e);
                }
            }
        }
        Self::record_request("sentiment", "none", start, false);
        Err(last_err.unwrap_or(GatewayError::NoProvider("sentiment")))
    }

    /// Classification using the fallback chain.
    #[instrument(skip(self, text), fields(operation = "classification"))]
    pub async fn classify(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Scored<ClassificationResult>> {
        let start = Instant::now();
        let mut last_err = None;
        for provider in &self.classify {
            match provider.classify(text, language).await {
                Ok(result) => {
                    Self::record_request("classification", provider.name(), start, true);
                    return Ok(result);
                }
                Err(e) if Self::is_fallback_trigger(&e) => {
                    debug!(provider = provider.name(), "provider unavailable, falling back");
                    last_err = Some(e);
                    continue;
                }
                Err(e) => {
                    Self::record_request("classification", provider.name(), start, false);
                    return Err(e);
                }
            }
        }
        Self::record_request("classification", "none", start, false);
        Err(last_err.unwrap_or(GatewayError::NoProvider("classification")))
    }

    /// Keyword extraction using the fallback chain.
    #[instrument(skip(self, text), fields(operation = "keywords"))]
    pub async fn keywords(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Scored<KeywordsResult>> {
        let start = Instant::now();
        let mut last_err = None;
        for provider in &self.keywords {
            match provider.extract_keywords(text, language).await {
                Ok(result) => {
                    Self::record_request("keywords", provider.name(), start, true);
                    return Ok(result);
                }
                Err(e) if Self::is_fallback_trigger(&e) => {
                    debug!(provider = provider.name(), "provider unavailable, falling back");
                    last_err = Some(e);
                    continue;
                }
                Err(e) => {
                    Self::record_request("keywords", provider.name(), start, false);
                    return Err(e);
                }
            }
        }
        Self::record_request("keywords", "none", start, false);
        Err(last_err.unwrap_or(GatewayError::NoProvider("keywords")))
    }

    /// Optimize content with the platform's optimizer, or the generic one.
    #[instrument(skip(self, request), fields(operation = "optimize", platform = %request.platform))]
    pub async fn optimize(&self, request: &ContentOptimizationRequest) -> Result<Optimization> {
        let start = Instant::now();
        let Some(optimizer) = self
            .optimizers
            .get(&request.platform)
            .or(self.generic_optimizer.as_ref())
        else {
            Self::record_request("optimize", "none", start, false);
            return Err(GatewayError::NoProvider("optimize"));
        };

        let result = optimizer.optimize(request).await;
        Self::record_request("optimize", optimizer.name(), start, result.is_ok());
        result
    }

    // ========================================================================
    // Capability introspection
    // ========================================================================

    /// Check if any provider is registered for the analysis type.
    pub fn supports(&self, kind: AnalysisType) -> bool {
        match kind {
            AnalysisType::Sentiment => !self.sentiment.is_empty(),
            AnalysisType::Classification => !self.classify.is_empty(),
            AnalysisType::Keywords => !self.keywords.is_empty(),
        }
    }

    /// List all registered provider names per capability (in priority order).
    pub fn provider_names(&self) -> ProviderNames {
        let mut optimizers: Vec<(String, String)> = self
            .optimizers
            .iter()
            .map(|(platform, o)| (platform.to_string(), o.name().to_string()))
            .collect();
        optimizers.sort();

        ProviderNames {
            sentiment: self.sentiment.iter().map(|p| p.name().to_string()).collect(),
            classify: self.classify.iter().map(|p| p.name().to_string()).collect(),
            keywords: self.keywords.iter().map(|p| p.name().to_string()).collect(),
            optimizers,
            generic_optimizer: self.generic_optimizer.as_ref().map(|o| o.name().to_string()),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_fallback_trigger(err: &GatewayError) -> bool {
        matches!(err, GatewayError::ModelNotAvailable)
    }

    /// Record request outcome metrics (counter + histogram).
    fn record_request(operation: &'static str, provider: &str, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        let elapsed = start.elapsed().as_secs_f64();
        metrics::counter!(telemetry::REQUESTS_TOTAL,
            "provider" => provider.to_owned(),
            "operation" => operation,
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
            "provider" => provider.to_owned(),
            "operation" => operation,
        )
        .record(elapsed);
    }
}
