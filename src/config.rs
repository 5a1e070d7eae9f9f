//! Config file handling - backend base URL injection

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR, CONFIG_FILE, DEFAULT_BASE_URL};

/// Application configuration, loaded from `~/.showroom/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the car listings backend
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }
}

impl Config {
    /// Load the config from the home directory, falling back to defaults
    pub fn load() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR);
        Self::load_from(&dir)
    }

    /// Load the config from a specific directory
    ///
    /// A missing or unreadable file yields the default config; a present
    /// but malformed file is reported and also falls back to defaults.
    pub fn load_from(dir: &Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str::<Config>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), base_url = %config.base_url, "Loaded config");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// Write the config to a specific directory, creating it if needed
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(dir.path());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempdir().unwrap();
        let config = Config {
            base_url: String::from("http://cars.internal:9000"),
        };
        config.save_to(dir.path()).unwrap();
        assert_eq!(Config::load_from(dir.path()), config);
    }

    #[test]
    fn malformed_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "base_url: [not, a, string]").unwrap();
        let config = Config::load_from(dir.path());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
