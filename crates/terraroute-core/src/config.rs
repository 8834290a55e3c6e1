// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Terraroute Contributors

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend root, without the `/api/v1` suffix.
    pub api_base_url: String,
    pub timeout_secs: u64,
    /// Send the excluded countries along with route requests. The backend
    /// does not route around borders yet, so this is off by default.
    pub forward_excluded_countries: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
            forward_excluded_countries: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config_path: crate::get_config_root().join("config.json"),
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            log::debug!(
                "No config at {}; using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read config.json")?;

        serde_json::from_str(&content).context("Failed to parse config.json")
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("config.json"));
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("nested").join("config.json"));
        let config = Config {
            api_base_url: "http://10.0.0.5:8080".to_string(),
            timeout_secs: 5,
            forward_excluded_countries: true,
        };

        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"timeout_secs": 3}"#).unwrap();

        let config = ConfigManager::with_path(&path).load().unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(!config.forward_excluded_countries);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(ConfigManager::with_path(&path).load().is_err());
    }
}
