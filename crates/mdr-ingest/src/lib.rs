//! Export ingestion for the MDR comparison.
//!
//! This crate loads the RCC build export (`Item` sheet) and the MDR
//! repository export (`Data` sheet) from `.xlsx` workbooks or CSV files into
//! Polars DataFrames, checks that the columns the comparison reads are
//! present, and extracts typed rows from them.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use mdr_ingest::{build_rows_from_frame, read_export, repository_items_from_frame};
//! use mdr_model::columns::{BUILD_SHEET, REPOSITORY_SHEET};
//!
//! let build = read_export(Path::new("rcc_export.xlsx"), BUILD_SHEET)?;
//! let repository = read_export(Path::new("mdr_data.csv"), REPOSITORY_SHEET)?;
//! let build_rows = build_rows_from_frame(&build)?;
//! let repository_rows = repository_items_from_frame(&repository)?;
//! ```

mod error;
pub mod polars_utils;
mod reader;
mod tables;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{frame_from_columns, read_csv_table};

// === Workbook Reading ===
pub use workbook::{is_workbook, read_export, read_workbook_sheet, sheet_names};

// === Table Access ===
pub use tables::{
    build_rows_from_frame, repository_items_from_frame, require_columns, validate_build_table,
    validate_repository_table,
};
