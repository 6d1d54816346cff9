//! quizmith-store — the persisted admin override store.
//!
//! Admin-authored questions live in a key-value store supplied by the
//! environment; when the store is non-empty it supersedes the loaded JSON
//! configuration for quiz-taking purposes.

pub mod admin;
pub mod kv;
