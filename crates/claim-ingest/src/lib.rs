//! Dataset ingestion for claim feature preparation.
//!
//! Reads the raw policy table from CSV into a Polars DataFrame and writes
//! prepared splits back out.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use claim_ingest::CsvLoader;
//!
//! let raw = CsvLoader::new(Path::new("data/train_data.csv")).load()?;
//! ```

mod error;
mod loader;
mod writer;

pub use error::{IngestError, Result};
pub use loader::{CsvLoader, DEFAULT_INFER_SCHEMA_LENGTH};
pub use writer::write_csv;
