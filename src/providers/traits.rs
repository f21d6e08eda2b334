//! Provider traits for capability-specific implementations.
//!
//! Each analysis type and the content optimizer is its own trait rather
//! than one "god trait", so a real model can replace a single branch
//! without touching the gateway.
//!
//! # Fallback Semantics
//!
//! Providers receive the language and self-report availability:
//! - Return `ModelNotAvailable` to signal the registry should try the next provider
//! - Other errors are terminal and propagated to the caller
//!
//! # Example
//!
//! ```ignore
//! async fn analyze_sentiment(&self, text: &str, language: Language) -> Result<Scored<SentimentResult>> {
//!     if language != Language::Mg {
//!         return Err(GatewayError::ModelNotAvailable);
//!     }
//!     // ... run the Malagasy model
//! }
//! ```

use async_trait::async_trait;

use crate::Result;
use crate::types::{
    ClassificationResult, ContentOptimizationRequest, KeywordsResult, Language, Optimization,
    SentimentResult,
};

/// A provider output together with the provider's confidence in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored<T> {
    pub value: T,
    /// Confidence (0.0 to 1.0).
    pub confidence: f32,
}

impl<T> Scored<T> {
    /// Confidence is clamped to [0, 1]; NaN becomes 0.
    pub fn new(value: T, confidence: f32) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self { value, confidence }
    }

    /// Transform the value, keeping the confidence.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Scored<U> {
        Scored {
            value: f(self.value),
            confidence: self.confidence,
        }
    }
}

// ============================================================================
// Sentiment Provider
// ============================================================================

/// Provider for sentiment analysis.
#[async_trait]
pub trait SentimentProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Polarity and emotion breakdown of `text`.
    ///
    /// Returns `ModelNotAvailable` if this provider cannot handle the
    /// language; the registry will try the next provider.
    async fn analyze_sentiment(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Scored<SentimentResult>>;
}

// ============================================================================
// Classification Provider
// ============================================================================

/// Provider for content classification.
#[async_trait]
pub trait ClassifyProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Category, subcategory and topics of `text`.
    async fn classify(&self, text: &str, language: Language)
    -> Result<Scored<ClassificationResult>>;
}

// ============================================================================
// Keyword Provider
// ============================================================================

/// Provider for keyword and entity extraction.
#[async_trait]
pub trait KeywordProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Keywords and named entities found in `text`.
    async fn extract_keywords(&self, text: &str, language: Language)
    -> Result<Scored<KeywordsResult>>;
}

// ============================================================================
// Content Optimizer
// ============================================================================

/// Rewrites content and produces suggestions for one publishing platform.
#[async_trait]
pub trait ContentOptimizer: Send + Sync {
    /// Optimizer name for logging/debugging.
    fn name(&self) -> &str;

    async fn optimize(&self, request: &ContentOptimizationRequest) -> Result<Optimization>;
}
