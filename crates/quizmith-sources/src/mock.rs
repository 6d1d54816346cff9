//! Mock fetcher for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use quizmith_core::error::ConfigError;
use quizmith_core::traits::ConfigFetcher;

/// A mock configuration fetcher for exercising the loader and resolution
/// chain without real I/O.
pub struct MockFetcher {
    payload: Option<String>,
    call_count: AtomicU32,
}

impl MockFetcher {
    /// A fetcher that always serves the given document.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            payload: Some(payload.to_string()),
            call_count: AtomicU32::new(0),
        }
    }

    /// A fetcher that always reports the source as unavailable.
    pub fn unavailable() -> Self {
        Self {
            payload: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Number of fetches made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ConfigFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<String, ConfigError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.payload
            .clone()
            .ok_or_else(|| ConfigError::Unavailable("mock fetcher configured to fail".into()))
    }
}
