//! Error types for feature scaling.

use thiserror::Error;

/// Errors raised by scalers and the scaler registry.
#[derive(Debug, Error)]
pub enum ScalingError {
    /// No scaler is registered under the requested name.
    #[error("unknown scaler '{name}' (available: {})", available.join(", "))]
    UnknownScaler {
        name: String,
        available: Vec<String>,
    },

    /// `transform` was called before `fit`.
    #[error("scaler '{scaler}' must be fitted before transform")]
    NotFitted { scaler: String },

    /// A column seen during fit is missing from the frame being transformed.
    #[error("feature '{column}' was fitted but is missing from the input")]
    MissingFeature { column: String },

    /// A column cannot be treated as numeric.
    #[error("column '{column}' has non-numeric dtype {dtype}")]
    NonNumericColumn { column: String, dtype: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ScalingError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for scaling operations.
pub type Result<T> = std::result::Result<T, ScalingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_scaler_lists_alternatives() {
        let err = ScalingError::UnknownScaler {
            name: "zscore".to_string(),
            available: vec!["none".to_string(), "standard".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown scaler 'zscore' (available: none, standard)"
        );
    }
}
