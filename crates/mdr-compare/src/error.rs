//! Error types for comparison runs.

use thiserror::Error;

use mdr_ingest::IngestError;
use mdr_model::ModelError;

/// Errors that stop a comparison before any result is produced.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Input table missing a column, or holding an unreadable value.
    #[error(transparent)]
    Input(#[from] IngestError),

    /// Configuration rejected before the run.
    #[error(transparent)]
    Config(#[from] ModelError),

    /// Building the report table failed.
    #[error("report table: {message}")]
    Report { message: String },
}

impl From<polars::prelude::PolarsError> for CompareError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Report {
            message: err.to_string(),
        }
    }
}

impl CompareError {
    /// Whether the error is a required column missing from an input table.
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::Input(IngestError::MissingColumn { .. }))
    }
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;
