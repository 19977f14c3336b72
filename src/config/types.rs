//! Sub-configuration structs with pipeline defaults.

use serde::{Deserialize, Serialize};

/// Analysis scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Period between analysis cycle attempts in milliseconds
    pub interval_ms: u64,

    /// Pixels of padding around the subject bounding box before cropping
    pub crop_margin: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            crop_margin: 40,
        }
    }
}

/// Semantic search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before a changed query is searched, in milliseconds
    pub debounce_ms: u64,

    /// Maximum ranked items returned per search
    pub top_k: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            top_k: 6,
        }
    }
}

/// Style classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Style labels kept per subject
    pub max_styles: usize,

    /// Occasion labels kept per subject
    pub max_occasions: usize,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            max_styles: 4,
            max_occasions: 3,
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the catalog JSON file (supports ~ expansion)
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "~/.vitrine/catalog.json".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
