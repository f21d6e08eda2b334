//! Application state.

use std::sync::Arc;

use crate::TextGateway;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn TextGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn TextGateway>) -> Self {
        Self { gateway }
    }
}
