//! Startup model loading.

use async_trait::async_trait;
use tracing::{error, info, warn};

use super::registry::{ModelHandle, ModelRegistry};
use crate::Result;

/// Loads a named model into memory.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Loader name for logging/debugging.
    fn name(&self) -> &str;

    async fn load(&self, model: &str) -> Result<ModelHandle>;
}

/// Build the model registry. Runs once, before the server binds.
///
/// A model that fails to load is logged and skipped; startup continues
/// with whatever loaded. Without a loader the registry stays empty.
pub async fn load_models(preload: &[String], loader: Option<&dyn ModelLoader>) -> ModelRegistry {
    let Some(loader) = loader else {
        if !preload.is_empty() {
            warn!(
                requested = preload.len(),
                "no model loader configured, skipping preload"
            );
        }
        info!("model registry initialised empty");
        return ModelRegistry::empty();
    };

    info!(loader = loader.name(), requested = preload.len(), "loading models");
    let mut builder = ModelRegistry::builder();
    for name in preload {
        match loader.load(name).await {
            Ok(handle) => {
                info!(model = %handle.name, capability = %handle.capability, "model loaded");
                builder = builder.insert(handle);
            }
            Err(e) => error!(model = %name, error = %e, "failed to load model"),
        }
    }

    let registry = builder.build();
    info!(loaded = registry.len(), "model loading finished");
    registry
}
