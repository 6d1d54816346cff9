//! Command implementations and shared wiring helpers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizmith_core::loader::QuizLoader;
use quizmith_sources::config::{create_fetcher, load_config_from, QuizmithConfig, SourceConfig};
use quizmith_store::admin::{AdminCredentials, AdminStore};
use quizmith_store::kv::FileStore;

pub mod auth;
pub mod export;
pub mod import;
pub mod init;
pub mod questions;
pub mod score;
pub mod sync;
pub mod validate;

/// Load the application config, then apply command-line overrides.
pub(crate) fn resolve_config(
    config_path: Option<&Path>,
    data: Option<PathBuf>,
    store: Option<PathBuf>,
) -> Result<QuizmithConfig> {
    let mut config = load_config_from(config_path)?;
    if let Some(path) = data {
        config.source = SourceConfig::File { path };
    }
    if let Some(path) = store {
        config.store_path = path;
    }
    Ok(config)
}

pub(crate) fn open_admin_store(config: &QuizmithConfig) -> Result<AdminStore> {
    let kv = FileStore::open(&config.store_path)
        .with_context(|| format!("failed to open store at {}", config.store_path.display()))?;
    let credentials = AdminCredentials {
        username: config.admin.username.clone(),
        password: config.admin.password.clone(),
    };
    Ok(AdminStore::new(kv, credentials))
}

pub(crate) fn build_loader(config: &QuizmithConfig) -> QuizLoader {
    QuizLoader::boxed(create_fetcher(&config.source))
}

/// Admin commands require a persisted authenticated session.
pub(crate) fn require_authenticated(store: &AdminStore) -> Result<()> {
    if !store.is_authenticated() {
        anyhow::bail!("not authenticated: run `quizmith login` first");
    }
    Ok(())
}
