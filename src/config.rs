//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Override for the directory step snapshots are written to
    pub data_dir: Option<PathBuf>,
}

impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "intake", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IntakeConfig::default();
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = IntakeConfig {
            data_dir: Some(PathBuf::from("/tmp/intake")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: IntakeConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/intake")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: IntakeConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.data_dir.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"data_dir": "/tmp/intake", "unknown_field": "value"}"#;
        let parsed: IntakeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/intake")));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = IntakeConfig::load();
        assert!(result.is_ok());
    }
}
