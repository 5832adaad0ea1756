//! Error types for export ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading an export table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Export file not found.
    #[error("export file not found: {path}")]
    FileNotFound { path: PathBuf },

    // === CSV Parsing Errors ===
    /// Failed to parse the CSV structure.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Workbook Errors ===
    /// The workbook could not be opened or a worksheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook has no worksheet with the expected name.
    #[error("worksheet '{sheet}' not found in {path}")]
    MissingSheet { path: PathBuf, sheet: String },

    // === Table Errors ===
    /// Required column not present in an input table.
    #[error("required column '{column}' not found in {table} table")]
    MissingColumn { table: String, column: String },

    /// A cell could not be interpreted.
    #[error("malformed {table} table: column '{column}' row {row} has unreadable value '{value}'")]
    MalformedInput {
        table: String,
        column: String,
        row: usize,
        value: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
