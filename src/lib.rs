//! ml-gateway - bilingual (FR/MG) text analysis and content optimization
//!
//! This crate exposes a stable [`TextGateway`] trait covering the four
//! service operations (health, text analysis, content optimization, model
//! listing) and an [`AnalysisGateway`] that dispatches each analysis type
//! and publishing platform to a pluggable provider.
//!
//! No model is loaded yet: the default providers answer with fixed
//! placeholder payloads, so API consumers can integrate against stable
//! response shapes while real models are plugged in branch by branch.
//!
//! # Example
//!
//! ```rust
//! use ml_gateway::{AnalysisType, Gateway, Language, TextAnalysisRequest, TextGateway};
//!
//! #[tokio::main]
//! async fn main() -> ml_gateway::Result<()> {
//!     let gateway = Gateway::builder().build()?;
//!
//!     let response = gateway
//!         .analyze_text(TextAnalysisRequest::new(
//!             "Tena tsara ny serivisy",
//!             Language::Mg,
//!             AnalysisType::Sentiment,
//!         ))
//!         .await?;
//!
//!     println!("{:?} ({})", response.result, response.confidence);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod gateway;
pub mod model;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod traits;
pub mod types;
mod version;

// Re-export main types at crate root
pub use error::{GatewayError, Result};
pub use gateway::{AnalysisGateway, Gateway, GatewayBuilder};
pub use traits::TextGateway;
pub use version::{PKG_NAME, PKG_VERSION, version_string};

// Re-export all types
pub use types::{
    AnalysisResult, AnalysisType, ClassificationResult, ContentOptimizationRequest,
    ContentOptimizationResponse, Emotions, Entities, HealthResponse, KeywordsResult, Language,
    ModelsResponse, Optimization, Platform, SentimentLabel, SentimentResult, TextAnalysisRequest,
    TextAnalysisResponse,
};
