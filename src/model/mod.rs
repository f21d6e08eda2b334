//! Model registry and startup loading.

pub mod loader;
pub mod registry;

pub use loader::{ModelLoader, load_models};
pub use registry::{ModelHandle, ModelRegistry, ModelRegistryBuilder};
