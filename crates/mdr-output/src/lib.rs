//! Report export for the MDR comparison.
//!
//! - **CSV**: one file per run, `MDRComparisonOutput_<timestamp>.csv`, with an
//!   optional empty annotation column for reviewers
//! - **JSON**: the report rows for machine consumption

mod error;
mod export;

pub use error::{OutputError, Result};
pub use export::{
    DEFAULT_ANNOTATION_COLUMN, EXPORT_PREFIX, ExportOptions, default_export_dir,
    timestamped_export_path, write_report_csv, write_report_csv_to, write_report_json,
    write_report_json_to,
};
