//! Data model for claim feature preparation.
//!
//! - **roles**: the column role schema that drives the feature transformer
//! - **config**: application configuration (dataset path, split, strategies)
//! - **error**: configuration errors

pub mod config;
pub mod error;
pub mod roles;

pub use config::{AppConfig, SamplingConfig, ScalingConfig};
pub use error::{ConfigError, Result};
pub use roles::{BooleanLabels, ColumnRole, ColumnRoles};
