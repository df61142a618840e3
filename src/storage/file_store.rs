//! JSON-file-backed key-value store

use super::StepStore;
use anyhow::Result;
use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Key-value store keeping one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store in the platform data directory, or at an override path
    pub fn new(data_dir: Option<&Path>) -> Result<Self, StorageError> {
        match data_dir {
            Some(dir) => Ok(Self::with_root(dir.to_path_buf())),
            None => {
                let dirs = ProjectDirs::from("io", "intake", "intake-tui")
                    .ok_or(StorageError::NoDataDir)?;
                Ok(Self::with_root(dirs.data_dir().to_path_buf()))
            }
        }
    }

    /// Create a store rooted at an explicit directory
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StepStore for JsonFileStore {
    async fn write(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                path: self.root.clone(),
                source,
            })?;
        let path = self.key_path(key);
        tokio::fs::write(&path, value)
            .await
            .map_err(|source| StorageError::Io { path, source })?;
        Ok(())
    }

    async fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }.into()),
        }
    }
}
