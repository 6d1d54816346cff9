//! Configuration error types.
//!
//! Defined in `quizmith-core` so the resolution chain can classify failures
//! for fallback decisions without string matching.

use thiserror::Error;

/// Errors raised while obtaining or interpreting a quiz configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration source could not be reached (transport failure,
    /// non-success status, unreadable file).
    #[error("configuration unavailable: {0}")]
    Unavailable(String),

    /// The document was fetched but could not be parsed or fails the
    /// structural checks.
    #[error("configuration invalid: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Returns `true` if the source itself failed, as opposed to the
    /// document it served.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ConfigError::Unavailable(_))
    }
}
