//! Core trait definitions for configuration fetching and question sources.
//!
//! These async traits are implemented by the `quizmith-sources` and
//! `quizmith-store` crates (and by [`crate::loader::QuizLoader`] itself).

use async_trait::async_trait;

use crate::error::ConfigError;
use crate::model::Question;

/// Capability to retrieve the raw quiz configuration document.
///
/// The loader does not know or care where the document lives; callers
/// supply an HTTP, file, or in-memory implementation.
#[async_trait]
pub trait ConfigFetcher: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the raw JSON document.
    async fn fetch(&self) -> Result<String, ConfigError>;
}

/// A provider of quiz-taking questions.
///
/// `Ok` with an empty list is the explicit "no data" signal: the resolution
/// chain moves on to the next source instead of treating it as a failure.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name (e.g. "override-store").
    fn name(&self) -> &str;

    /// The questions this source currently offers, in display order.
    async fn questions(&self) -> Result<Vec<Question>, ConfigError>;
}
