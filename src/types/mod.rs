//! Public types for the gateway API.

mod analysis;
mod language;
mod optimize;
mod service;

pub use analysis::{
    AnalysisResult, ClassificationResult, Emotions, Entities, KeywordsResult, SentimentLabel,
    SentimentResult, TextAnalysisRequest, TextAnalysisResponse,
};
pub use language::{AnalysisType, Language};
pub use optimize::{ContentOptimizationRequest, ContentOptimizationResponse, Optimization, Platform};
pub use service::{HealthResponse, ModelsResponse};
