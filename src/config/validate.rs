//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "scheduler.interval_ms must be > 0".into(),
            ));
        }
        if self.classification.max_styles == 0 {
            return Err(ConfigError::ValidationError(
                "classification.max_styles must be > 0".into(),
            ));
        }
        if self.classification.max_occasions == 0 {
            return Err(ConfigError::ValidationError(
                "classification.max_occasions must be > 0".into(),
            ));
        }
        Ok(())
    }
}
