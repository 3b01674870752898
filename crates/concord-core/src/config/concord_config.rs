//! Top-level Concord configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DedupConfig, MatchingConfig};
use crate::errors::{ConcordResult, ConfigError};

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcordConfig {
    pub matching: MatchingConfig,
    pub dedup: DedupConfig,
}

impl ConcordConfig {
    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> ConcordResult<Self> {
        Self::parse(toml_str, "<string>")
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConcordResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> ConcordResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.matching.grounding_namespace.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "matching.grounding_namespace".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.dedup.refinement_cache_capacity == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dedup.refinement_cache_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
