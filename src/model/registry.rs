//! Immutable registry of loaded models.
//!
//! Built once by the startup hook, before the listener accepts
//! connections, then shared read-only behind an `Arc`. There is no
//! insertion after [`ModelRegistryBuilder::build`], so no lock is needed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::types::{AnalysisType, Language};

/// A loaded model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHandle {
    /// Registry key, e.g. `sentiment_fr`.
    pub name: String,
    /// Analysis the model serves.
    pub capability: AnalysisType,
    /// Language the model was trained on; `None` for multilingual models.
    pub language: Option<Language>,
}

impl ModelHandle {
    pub fn new(
        name: impl Into<String>,
        capability: AnalysisType,
        language: Option<Language>,
    ) -> Self {
        Self {
            name: name.into(),
            capability,
            language,
        }
    }
}

/// Read-only mapping from model name to handle.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Arc<ModelHandle>>,
}

impl ModelRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// Model names in ascending order.
    pub fn names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Collects handles during startup; consumed into a [`ModelRegistry`].
#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    models: BTreeMap<String, Arc<ModelHandle>>,
}

impl ModelRegistryBuilder {
    /// Register a handle. A later handle with the same name replaces the earlier one.
    pub fn insert(mut self, handle: ModelHandle) -> Self {
        self.models.insert(handle.name.clone(), Arc::new(handle));
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            models: self.models,
        }
    }
}
