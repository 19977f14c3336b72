//! Configuration management for Vitrine.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; every section is optional in the TOML file.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Vitrine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analysis scheduler settings
    pub scheduler: SchedulerConfig,

    /// Semantic search settings
    pub search: SearchConfig,

    /// Style classification settings
    pub classification: ClassificationConfig,

    /// Catalog settings
    pub catalog: CatalogConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.vitrine.vitrine/config.toml
    /// - Linux: ~/.config/vitrine/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\vitrine\config\config.toml
    ///
    /// Falls back to ~/.vitrine/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "vitrine", "vitrine")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".vitrine").join("config.toml")
            })
    }

    /// Get the resolved catalog file path (with ~ expansion).
    pub fn catalog_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.catalog.path);
        PathBuf::from(expanded.into_owned())
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scheduler.interval_ms, 3000);
        assert_eq!(config.scheduler.crop_margin, 40);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.top_k, 6);
        assert_eq!(config.classification.max_styles, 4);
        assert_eq!(config.classification.max_occasions, 3);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[scheduler]"));
        assert!(toml.contains("[search]"));
    }

    #[test]
    fn test_load_from_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\ndebounce_ms = 150\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.search.debounce_ms, 150);
        // Untouched sections keep their defaults
        assert_eq!(config.search.top_k, 6);
        assert_eq!(config.scheduler.interval_ms, 3000);
    }

    #[test]
    fn test_catalog_path_expands_tilde() {
        let mut config = Config::default();
        config.catalog.path = "~/catalog.json".to_string();
        let path = config.catalog_path();
        assert!(!path.to_string_lossy().starts_with('~'));
        assert!(path.ends_with("catalog.json"));
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "scheduler = [broken").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
