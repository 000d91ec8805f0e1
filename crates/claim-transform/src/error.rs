//! Error types for feature transformation.

use thiserror::Error;

/// Errors that stop a table from being turned into `(X, y)`.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The label column is not in the table.
    #[error("label column '{column}' not found in table")]
    MissingColumn { column: String },

    /// A label value is null or outside `{0, 1}`.
    #[error("label at row {row} must be 0 or 1, found '{value}'")]
    InvalidLabel { row: usize, value: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransformError::MissingColumn {
            column: "is_claim".to_string(),
        };
        assert_eq!(err.to_string(), "label column 'is_claim' not found in table");

        let err = TransformError::InvalidLabel {
            row: 3,
            value: "2".to_string(),
        };
        assert_eq!(err.to_string(), "label at row 3 must be 0 or 1, found '2'");
    }
}
