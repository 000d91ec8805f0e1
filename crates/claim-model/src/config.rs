//! Application configuration.
//!
//! Mirrors the settings the preparation pipeline consumes read-only: where
//! the dataset lives, how to split it, the column role schema, and which
//! resampling and scaling strategies to apply. All sections use serde
//! defaults so a TOML file only needs to override what differs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::roles::ColumnRoles;

/// Resampling settings for the training split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Registered sampling method name (`none`, `random`, `smote`, `adasyn`).
    pub method: String,
    /// Balance target (`minority`, `not majority`, `all`, `auto`, or a ratio).
    pub strategy: String,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            method: "none".to_string(),
            strategy: "minority".to_string(),
        }
    }
}

/// Feature scaling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Registered scaler name (`none`, `standard`, `minmax`, `robust`).
    pub method: String,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            method: "standard".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the raw CSV dataset.
    pub data_path: PathBuf,
    /// Fraction of rows held out for evaluation.
    pub test_size: f64,
    /// Seed for splitting and resampling.
    pub random_state: u64,
    /// Column role schema.
    pub columns: ColumnRoles,
    pub sampling: SamplingConfig,
    pub scaling: ScalingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/train_data.csv"),
            test_size: 0.2,
            random_state: 11,
            columns: ColumnRoles::default(),
            sampling: SamplingConfig::default(),
            scaling: ScalingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Name of the label column declared in the schema.
    pub fn target_column(&self) -> &str {
        &self.columns.label_column
    }

    /// Parses a configuration from TOML text.
    ///
    /// `origin` is only used to label parse errors.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks scalar settings and the column role schema.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "test_size",
                reason: format!("{} is outside (0, 1)", self.test_size),
            });
        }
        if self.sampling.method.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sampling.method",
                reason: "must not be empty".to_string(),
            });
        }
        if self.scaling.method.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "scaling.method",
                reason: "must not be empty".to_string(),
            });
        }
        self.columns.validate()
    }
}
