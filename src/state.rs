// src/state.rs
use std::sync::Arc;

use crate::services::metrics_manager::MetricsManager;

pub type SharedState = Arc<AppState>;

#[derive(Debug, Default)]
pub struct AppState {
    pub metrics: MetricsManager,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: MetricsManager::new(),
        }
    }
}
