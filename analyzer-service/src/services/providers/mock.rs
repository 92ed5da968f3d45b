//! Mock provider implementation for testing.

use super::{AnalysisProvider, ProviderError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock analysis provider returning a canned outcome.
///
/// Counts invocations so tests can assert that rejected requests never
/// reach the upstream call.
pub struct MockAnalysisProvider {
    outcome: Result<String, ProviderError>,
    calls: AtomicUsize,
}

impl MockAnalysisProvider {
    /// A provider that succeeds with the given analysis text.
    pub fn replying(analysis: &str) -> Self {
        Self {
            outcome: Ok(analysis.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A provider that fails with the given error.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times analyze was invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalysisProvider {
    async fn analyze(&self, _sermon_text: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
