//! Service introspection responses.

use serde::{Deserialize, Serialize};

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub models_loaded: Vec<String>,
}

/// Loaded models plus the fixed sets of supported languages and analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub languages_supported: Vec<String>,
    pub analysis_types: Vec<String>,
}
