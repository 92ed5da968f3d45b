//! Upstream provider abstraction and implementations.
//!
//! The analyze handler talks to a trait object so router tests can swap in
//! the mock backend instead of the live Anthropic API.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream API error: status {0}")]
    UpstreamStatus(u16),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

/// Trait for sermon feedback providers.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Send the sermon text upstream and return the analysis text verbatim.
    async fn analyze(&self, sermon_text: &str) -> Result<String, ProviderError>;
}
