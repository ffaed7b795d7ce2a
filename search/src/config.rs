use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Similarity tuning, loadable from TOML.
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Jaro score at which the shared-prefix boost kicks in.
    pub boost_threshold: f64,
    /// Maximum number of leading chars that earn the boost.
    pub prefix_size: usize,
    pub prefix_scale: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            boost_threshold: 0.7,
            prefix_size: 4,
            prefix_scale: 0.1,
        }
    }
}

impl SearchConfig {
    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns list of validation errors, empty if the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.boost_threshold) {
            errors.push("boost_threshold must be between 0.0 and 1.0".to_string());
        }

        if self.prefix_scale.is_nan() || self.prefix_scale < 0.0 {
            errors.push("prefix_scale must be >= 0.0".to_string());
        } else if self.prefix_scale * self.prefix_size as f64 > 1.0 {
            errors.push("prefix_scale * prefix_size must not exceed 1.0".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();

        let boost_threshold = if (0.0..=1.0).contains(&self.boost_threshold) {
            self.boost_threshold
        } else {
            defaults.boost_threshold
        };

        let (prefix_size, prefix_scale) = if self.prefix_scale >= 0.0
            && self.prefix_scale * self.prefix_size as f64 <= 1.0
        {
            (self.prefix_size, self.prefix_scale)
        } else {
            (defaults.prefix_size, defaults.prefix_scale)
        };

        Self {
            boost_threshold,
            prefix_size,
            prefix_scale,
        }
    }
}

/// Errors that can occur when loading config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
