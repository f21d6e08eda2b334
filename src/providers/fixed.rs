//! Placeholder analysis providers.
//!
//! No model is loaded: every provider answers with the same literal
//! payload regardless of the input text. They stand in for real models
//! and keep the response shapes stable for API consumers.

use async_trait::async_trait;

use super::traits::{ClassifyProvider, KeywordProvider, Scored, SentimentProvider};
use crate::types::{
    ClassificationResult, Emotions, Entities, KeywordsResult, Language, SentimentLabel,
    SentimentResult,
};
use crate::{GatewayError, Result};

/// Confidence reported by every placeholder provider.
pub const PLACEHOLDER_CONFIDENCE: f32 = 0.85;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Languages a placeholder provider answers for.
#[derive(Debug, Clone)]
struct LanguageSet(Vec<Language>);

impl Default for LanguageSet {
    fn default() -> Self {
        Self(Language::ALL.to_vec())
    }
}

impl LanguageSet {
    fn check(&self, language: Language) -> Result<()> {
        if self.0.contains(&language) {
            Ok(())
        } else {
            Err(GatewayError::ModelNotAvailable)
        }
    }
}

// ============================================================================
// Sentiment
// ============================================================================

/// Always reports a positive sentiment with a joy-dominated emotion mix.
#[derive(Debug, Clone, Default)]
pub struct FixedSentimentProvider {
    languages: LanguageSet,
}

impl FixedSentimentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the provider to the given languages.
    pub fn for_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: LanguageSet(languages.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SentimentProvider for FixedSentimentProvider {
    fn name(&self) -> &str {
        "fixed-sentiment"
    }

    async fn analyze_sentiment(
        &self,
        _text: &str,
        language: Language,
    ) -> Result<Scored<SentimentResult>> {
        self.languages.check(language)?;
        Ok(Scored::new(
            SentimentResult {
                sentiment: SentimentLabel::Positive,
                score: 0.85,
                emotions: Emotions {
                    joy: 0.6,
                    confidence: 0.3,
                    surprise: 0.1,
                },
            },
            PLACEHOLDER_CONFIDENCE,
        ))
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Always classifies content as a commercial promotion.
#[derive(Debug, Clone, Default)]
pub struct FixedClassifyProvider {
    languages: LanguageSet,
}

impl FixedClassifyProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the provider to the given languages.
    pub fn for_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: LanguageSet(languages.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ClassifyProvider for FixedClassifyProvider {
    fn name(&self) -> &str {
        "fixed-classify"
    }

    async fn classify(
        &self,
        _text: &str,
        language: Language,
    ) -> Result<Scored<ClassificationResult>> {
        self.languages.check(language)?;
        Ok(Scored::new(
            ClassificationResult {
                category: "commercial".to_string(),
                subcategory: "promotion".to_string(),
                topics: strings(&["produit", "vente", "marketing"]),
            },
            PLACEHOLDER_CONFIDENCE,
        ))
    }
}

// ============================================================================
// Keywords
// ============================================================================

/// Always extracts the same marketing keywords and entities.
#[derive(Debug, Clone, Default)]
pub struct FixedKeywordProvider {
    languages: LanguageSet,
}

impl FixedKeywordProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the provider to the given languages.
    pub fn for_languages(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: LanguageSet(languages.into_iter().collect()),
        }
    }
}

#[async_trait]
impl KeywordProvider for FixedKeywordProvider {
    fn name(&self) -> &str {
        "fixed-keywords"
    }

    async fn extract_keywords(
        &self,
        _text: &str,
        language: Language,
    ) -> Result<Scored<KeywordsResult>> {
        self.languages.check(language)?;
        Ok(Scored::new(
            KeywordsResult {
                keywords: strings(&["marketing", "digital", "madagascar", "PME"]),
                entities: Entities {
                    organizations: strings(&["AI4Local"]),
                    locations: strings(&["Madagascar"]),
                    products: Vec::new(),
                },
            },
            PLACEHOLDER_CONFIDENCE,
        ))
    }
}
