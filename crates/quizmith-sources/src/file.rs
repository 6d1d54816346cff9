//! Local-file configuration fetcher.

use std::path::PathBuf;

use async_trait::async_trait;

use quizmith_core::error::ConfigError;
use quizmith_core::traits::ConfigFetcher;

/// Reads the quiz document from a local path.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ConfigFetcher for FileFetcher {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<String, ConfigError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ConfigError::Unavailable(format!("failed to read {}: {e}", self.path.display()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz-data.json");
        std::fs::write(&path, r#"{"questions": []}"#).unwrap();

        let fetcher = FileFetcher::new(&path);
        assert!(fetcher.fetch().await.unwrap().contains("questions"));
    }

    #[tokio::test]
    async fn missing_file_is_unavailable() {
        let fetcher = FileFetcher::new("/definitely/not/here.json");
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
