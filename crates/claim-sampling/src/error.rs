//! Error types for resampling.

use thiserror::Error;

/// Errors raised by resamplers and the sampler registry.
#[derive(Debug, Error)]
pub enum SamplingError {
    /// No resampler is registered under the requested name.
    #[error("unknown sampling method '{name}' (available: {})", available.join(", "))]
    UnknownSamplingMethod {
        name: String,
        available: Vec<String>,
    },

    /// A sampling strategy could not be parsed or applied.
    #[error("invalid sampling strategy '{value}': {reason}")]
    InvalidStrategy { value: String, reason: String },

    /// Resampling needs at least two classes.
    #[error("resampling needs at least two classes, found {classes}")]
    SingleClass { classes: usize },

    /// Synthesis cannot handle null values.
    #[error("column '{column}' contains missing values")]
    MissingValues { column: String },

    /// Synthesis needs numeric or boolean features.
    #[error("column '{column}' has non-numeric dtype {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for SamplingError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for resampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SamplingError::UnknownSamplingMethod {
            name: "tomek".to_string(),
            available: vec!["none".to_string(), "smote".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown sampling method 'tomek' (available: none, smote)"
        );
    }
}
