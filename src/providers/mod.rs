//! Capability providers and the registry that dispatches to them.
//!
//! Analysis types and publishing platforms each map to a pluggable
//! provider, so a real model can replace one branch at a time.

pub mod fixed;
pub mod optimizers;
pub mod registry;
pub mod traits;

pub use fixed::{FixedClassifyProvider, FixedKeywordProvider, FixedSentimentProvider};
pub use optimizers::SuggestionOptimizer;
pub use registry::{ProviderNames, ProviderRegistry};
pub use traits::{ClassifyProvider, ContentOptimizer, KeywordProvider, Scored, SentimentProvider};
