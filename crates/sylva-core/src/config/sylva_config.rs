//! Top-level Sylva configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FilterConfig, InclusionStrategy, ObservabilityConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SYLVA_*`)
/// 2. Project config (`sylva.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SylvaConfig {
    pub filter: FilterConfig,
    pub observability: ObservabilityConfig,
}

impl SylvaConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        let strategy = std::env::var(constants::FILTER_STRATEGY_ENV_VAR).ok();
        config.apply_strategy_override(strategy.as_deref());

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load `sylva.toml` from a project directory.
    pub fn load_from_dir(root: &Path) -> Result<Self, ConfigError> {
        Self::load(&root.join(constants::CONFIG_FILENAME))
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply a `SYLVA_FILTER_STRATEGY` value. Unknown names are ignored.
    pub fn apply_strategy_override(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            return;
        };
        match InclusionStrategy::from_str_name(value) {
            Some(strategy) => self.filter.strategy = strategy,
            None => tracing::warn!(
                value,
                env = constants::FILTER_STRATEGY_ENV_VAR,
                "ignoring unknown filter strategy override"
            ),
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &SylvaConfig) -> Result<(), ConfigError> {
        if config.filter.parallel_threshold == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "filter.parallel_threshold".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let level = config.observability.log_level.to_ascii_lowercase();
        if !constants::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {:?}", constants::LOG_LEVELS),
            });
        }
        Ok(())
    }
}
