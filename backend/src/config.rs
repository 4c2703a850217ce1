//! Estimator configuration
//!
//! The price table and presenter settings are static configuration,
//! loaded once from JSON and validated before use. Every section has a
//! default, so an empty object `{}` is a valid configuration.

use crate::pricing::table::PriceTable;
use crate::presenter::easing::Easing;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Reference transition length for the animated total
pub const DEFAULT_TRANSITION_MS: u64 = 800;

/// Errors loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Animated total settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Length of one transition in milliseconds
    #[serde(default = "default_transition_ms")]
    pub duration_ms: u64,

    /// Interpolation curve
    #[serde(default)]
    pub easing: Easing,
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
        }
    }
}

impl PresenterConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "presenter.duration_ms must be > 0".to_string(),
            ));
        }
        self.easing.validate()
    }
}

/// Complete estimator configuration
///
/// # Example
/// ```
/// use trip_estimator_core::EstimatorConfig;
///
/// let config = EstimatorConfig::from_json_str(r#"{"presenter": {"duration_ms": 400}}"#).unwrap();
/// assert_eq!(config.presenter.duration_ms, 400);
/// assert_eq!(config.price_table.hotel_nightly(1), 2_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default)]
    pub price_table: PriceTable,

    #[serde(default)]
    pub presenter: PresenterConfig,
}

impl EstimatorConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EstimatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.price_table.validate()?;
        self.presenter.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = EstimatorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EstimatorConfig::default());
        assert_eq!(config.presenter.duration(), Duration::from_millis(800));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = EstimatorConfig::from_json_str(r#"{"presenter": {"duration_ms": 0}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = EstimatorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
