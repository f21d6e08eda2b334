//! Text analysis request, response and per-type result payloads.

use serde::{Deserialize, Serialize};

use super::{AnalysisType, Language};

/// Inbound text analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    pub text: String,
    pub language: Language,
    pub analysis_type: AnalysisType,
}

impl TextAnalysisRequest {
    pub fn new(text: impl Into<String>, language: Language, analysis_type: AnalysisType) -> Self {
        Self {
            text: text.into(),
            language,
            analysis_type,
        }
    }
}

/// Text analysis response; request fields are echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysisResponse {
    pub text: String,
    pub language: Language,
    pub analysis_type: AnalysisType,
    pub result: AnalysisResult,
    /// Confidence in the result (0.0 to 1.0).
    pub confidence: f32,
    /// Wall-clock duration of the analysis, in seconds.
    pub processing_time: f64,
}

/// Result payload; its shape depends on the analysis type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Sentiment(SentimentResult),
    Classification(ClassificationResult),
    Keywords(KeywordsResult),
}

impl AnalysisResult {
    /// The analysis type this payload answers.
    pub fn analysis_type(&self) -> AnalysisType {
        match self {
            AnalysisResult::Sentiment(_) => AnalysisType::Sentiment,
            AnalysisResult::Classification(_) => AnalysisType::Classification,
            AnalysisResult::Keywords(_) => AnalysisType::Keywords,
        }
    }
}

/// Overall polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// Emotion distribution; the three scores sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Emotions {
    pub joy: f32,
    pub confidence: f32,
    pub surprise: f32,
}

/// Result of sentiment analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: SentimentLabel,
    /// Polarity score (0.0 to 1.0).
    pub score: f32,
    pub emotions: Emotions,
}

/// Result of content classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    pub subcategory: String,
    pub topics: Vec<String>,
}

/// Named entities found in a text, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
    pub products: Vec<String>,
}

/// Result of keyword extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordsResult {
    pub keywords: Vec<String>,
    pub entities: Entities,
}
