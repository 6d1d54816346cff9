//! Application configuration and fetcher factory.
//!
//! Note: Custom Debug impl masks the admin password to prevent accidental
//! exposure in logs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizmith_core::traits::ConfigFetcher;

use crate::file::FileFetcher;
use crate::http::HttpFetcher;

/// Where the quiz configuration document lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceConfig {
    Http {
        url: String,
    },
    File {
        path: PathBuf,
    },
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::File {
            path: PathBuf::from("quiz-data.json"),
        }
    }
}

/// Demo-mode admin credentials for the override store.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdminAuthConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "@Dmin".to_string()
}

impl Default for AdminAuthConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

impl std::fmt::Debug for AdminAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuthConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Top-level quizmith configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmithConfig {
    /// Path of the file-backed override store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Where to fetch the quiz document from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Admin credentials for the override store.
    #[serde(default)]
    pub admin: AdminAuthConfig,
}

impl Default for QuizmithConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            source: SourceConfig::default(),
            admin: AdminAuthConfig::default(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("quizmith-store.json")
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizmith.toml` in the current directory
/// 2. `~/.config/quizmith/config.toml`
///
/// Environment variable overrides: `QUIZMITH_DATA_URL`,
/// `QUIZMITH_ADMIN_PASSWORD`.
pub fn load_config() -> Result<QuizmithConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmithConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmith.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizmithConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            QuizmithConfig::default()
        }
    };

    // Apply env var overrides
    if let Ok(url) = std::env::var("QUIZMITH_DATA_URL") {
        config.source = SourceConfig::Http { url };
    }
    if let Ok(password) = std::env::var("QUIZMITH_ADMIN_PASSWORD") {
        config.admin.password = password;
    }

    // Resolve env vars inside the config values themselves
    config.source = match config.source {
        SourceConfig::Http { url } => SourceConfig::Http {
            url: resolve_env_vars(&url),
        },
        file @ SourceConfig::File { .. } => file,
    };
    config.admin.password = resolve_env_vars(&config.admin.password);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmith"))
}

/// Create a fetcher instance from the configured source.
pub fn create_fetcher(source: &SourceConfig) -> Box<dyn ConfigFetcher> {
    match source {
        SourceConfig::Http { url } => Box::new(HttpFetcher::new(url.clone())),
        SourceConfig::File { path } => Box::new(FileFetcher::new(path.clone())),
    }
}
