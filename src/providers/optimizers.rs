//! Per-platform content optimizers.
//!
//! The content itself is passed through unchanged; each optimizer only
//! contributes its platform's suggestion list and fixed scores.

use async_trait::async_trait;

use super::traits::ContentOptimizer;
use crate::Result;
use crate::types::{ContentOptimizationRequest, Optimization};

pub const DEFAULT_SEO_SCORE: f32 = 75.5;
pub const DEFAULT_READABILITY_SCORE: f32 = 82.3;

/// Pass-through optimizer with a fixed suggestion list.
#[derive(Debug, Clone)]
pub struct SuggestionOptimizer {
    name: &'static str,
    suggestions: &'static [&'static str],
}

impl SuggestionOptimizer {
    pub const fn new(name: &'static str, suggestions: &'static [&'static str]) -> Self {
        Self { name, suggestions }
    }

    /// Facebook: call-to-action first.
    pub const fn facebook() -> Self {
        Self::new(
            "facebook",
            &[
                "Ajouter un call-to-action",
                "Utiliser des hashtags pertinents",
                "Réduire la longueur du texte",
            ],
        )
    }

    /// Instagram: emojis first.
    pub const fn instagram() -> Self {
        Self::new(
            "instagram",
            &[
                "Ajouter plus d'émojis",
                "Structurer avec des hashtags",
                "Optimiser pour mobile",
            ],
        )
    }

    /// Fallback for email and any platform without a dedicated optimizer.
    pub const fn generic() -> Self {
        Self::new("generic", &["Contenu optimisé pour email"])
    }
}

#[async_trait]
impl ContentOptimizer for SuggestionOptimizer {
    fn name(&self) -> &str {
        self.name
    }

    async fn optimize(&self, request: &ContentOptimizationRequest) -> Result<Optimization> {
        Ok(Optimization {
            optimized_content: request.content.clone(),
            suggestions: self.suggestions.iter().map(|s| s.to_string()).collect(),
            seo_score: DEFAULT_SEO_SCORE,
            readability_score: DEFAULT_READABILITY_SCORE,
        })
    }
}
