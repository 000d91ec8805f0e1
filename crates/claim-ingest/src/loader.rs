//! CSV dataset loading.

use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::*;
use tracing::info;

use crate::error::{IngestError, Result};

/// Rows sampled when inferring column dtypes. `None` scans the whole file,
/// so a late decimal in an otherwise integer column still widens it.
pub const DEFAULT_INFER_SCHEMA_LENGTH: Option<usize> = None;

/// Loads a raw policy table from a CSV file with a single header row.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
    infer_schema_length: Option<usize>,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            infer_schema_length: DEFAULT_INFER_SCHEMA_LENGTH,
        }
    }

    /// Limits dtype inference to the first `rows` rows; `None` scans all.
    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows.map(|rows| rows.max(1));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole file.
    ///
    /// # Errors
    ///
    /// - [`IngestError::DatasetNotFound`] when the path does not exist
    /// - [`IngestError::CsvParse`] when Polars rejects the content
    /// - [`IngestError::EmptyDataset`] when the header has no rows under it
    pub fn load(&self) -> Result<DataFrame> {
        let start = Instant::now();
        check_exists(&self.path)?;

        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(self.infer_schema_length)
            .try_into_reader_with_file_path(Some(self.path.clone()))
            .map_err(|e| self.parse_error(&e))?
            .finish()
            .map_err(|e| self.parse_error(&e))?;

        if df.height() == 0 {
            return Err(IngestError::EmptyDataset {
                path: self.path.clone(),
            });
        }

        info!(
            path = %self.path.display(),
            rows = df.height(),
            columns = df.width(),
            duration_ms = start.elapsed().as_millis(),
            "Loaded dataset"
        );
        Ok(df)
    }

    fn parse_error(&self, err: &PolarsError) -> IngestError {
        IngestError::CsvParse {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

fn check_exists(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(IngestError::DatasetNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(IngestError::DatasetNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
