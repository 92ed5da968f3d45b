pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod services;
pub mod startup;

use services::providers::AnalysisProvider;
use std::sync::Arc;

/// Shared application state containing the upstream provider handle
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn AnalysisProvider>) -> Self {
        Self { provider }
    }
}
