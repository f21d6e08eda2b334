//! Content optimization types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Target publishing channel.
///
/// Any value other than `facebook` or `instagram` is kept verbatim and
/// handled by the generic (email) optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Facebook,
    Instagram,
    Other(String),
}

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Other(name) => name,
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.as_str() {
            "facebook" => Platform::Facebook,
            "instagram" => Platform::Instagram,
            _ => Platform::Other(value),
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform::from(value.to_string())
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound content optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentOptimizationRequest {
    pub content: String,
    pub target_audience: String,
    pub platform: Platform,
    pub language: String,
}

/// What an optimizer produced for one piece of content.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimization {
    pub optimized_content: String,
    pub suggestions: Vec<String>,
    pub seo_score: f32,
    pub readability_score: f32,
}

/// Content optimization response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentOptimizationResponse {
    pub original_content: String,
    pub optimized_content: String,
    pub suggestions: Vec<String>,
    pub seo_score: f32,
    pub readability_score: f32,
}

impl ContentOptimizationResponse {
    pub fn new(original_content: impl Into<String>, optimization: Optimization) -> Self {
        Self {
            original_content: original_content.into(),
            optimized_content: optimization.optimized_content,
            suggestions: optimization.suggestions,
            seo_score: optimization.seo_score,
            readability_score: optimization.readability_score,
        }
    }
}
