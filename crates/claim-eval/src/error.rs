//! Error types for splitting, training and prediction.

use thiserror::Error;

/// Errors raised outside metric computation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// `predict` was called before `train`.
    #[error("model '{model}' must be trained before predicting")]
    NotTrained { model: String },

    /// Training data has no rows.
    #[error("cannot train on an empty feature set")]
    EmptyTrainingSet,

    /// Test fraction outside `(0, 1)`.
    #[error("test size {value} must lie strictly between 0 and 1")]
    InvalidTestSize { value: f64 },

    /// The label vector contains nulls.
    #[error("label column '{column}' contains missing values")]
    MissingLabels { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for EvalError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvalError>;
