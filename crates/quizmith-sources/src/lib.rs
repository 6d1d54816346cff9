//! quizmith-sources — configuration document fetchers.
//!
//! Implementations of the [`quizmith_core::traits::ConfigFetcher`] trait
//! (HTTP, local file, mock) plus the application config file that selects
//! between them.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;
