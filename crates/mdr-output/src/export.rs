//! CSV and JSON export of the missing-items report.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use tracing::{info, warn};

use mdr_model::MissingField;
use mdr_model::columns::REPORT_COLUMNS;

use crate::error::{OutputError, Result};

/// File name prefix of exported reports.
pub const EXPORT_PREFIX: &str = "MDRComparisonOutput_";

/// Header of the reviewer annotation column when enabled without a name.
pub const DEFAULT_ANNOTATION_COLUMN: &str = "Comments";

/// Options for the CSV export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Appends an empty free-text column with this header.
    pub annotation_column: Option<String>,
    /// Replace an existing file instead of failing.
    pub overwrite: bool,
}

impl ExportOptions {
    #[must_use]
    pub fn with_annotation_column(mut self, header: impl Into<String>) -> Self {
        self.annotation_column = Some(header.into());
        self
    }

    #[must_use]
    pub fn with_overwrite(mut self, enable: bool) -> Self {
        self.overwrite = enable;
        self
    }
}

/// `MDRComparisonOutput_<YYYY_MM_DD_HH_MM_SS>.csv` inside `dir`.
pub fn timestamped_export_path<Tz>(dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    dir.join(format!(
        "{EXPORT_PREFIX}{}.csv",
        now.format("%Y_%m_%d_%H_%M_%S")
    ))
}

/// Directory exports land in by default: next to the build export.
pub fn default_export_dir(build_export: &Path) -> PathBuf {
    match build_export.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes the report as CSV to any writer.
pub fn write_report_csv_to<W: Write>(
    writer: W,
    rows: &[MissingField],
    options: &ExportOptions,
) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    let mut header: Vec<&str> = REPORT_COLUMNS.to_vec();
    if let Some(annotation) = &options.annotation_column {
        header.push(annotation.as_str());
    }
    out.write_record(&header)?;
    for row in rows {
        let mut record = vec![
            row.form_name.as_str(),
            row.item_name.as_str(),
            row.kind.as_str(),
            row.description.as_str(),
            row.context.as_deref().unwrap_or(""),
        ];
        if options.annotation_column.is_some() {
            record.push("");
        }
        out.write_record(&record)?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the report as CSV to `path`.
///
/// Fails with `AlreadyExists` when the file exists and `overwrite` is off.
pub fn write_report_csv(
    path: &Path,
    rows: &[MissingField],
    options: &ExportOptions,
) -> Result<()> {
    write_new_report(path, options, |writer| write_report_csv_to(writer, rows, options))?;
    info!(path = %path.display(), rows = rows.len(), "wrote comparison report");
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    missing: usize,
    rows: &'a [MissingField],
}

/// Writes the report as pretty JSON to any writer.
pub fn write_report_json_to<W: Write>(mut writer: W, rows: &[MissingField]) -> Result<()> {
    let report = JsonReport {
        missing: rows.len(),
        rows,
    };
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush().map_err(serde_json::Error::io)?;
    Ok(())
}

/// Writes the report as pretty JSON to `path`, with the same overwrite rule
/// as [`write_report_csv`]. The annotation column does not apply.
pub fn write_report_json(
    path: &Path,
    rows: &[MissingField],
    options: &ExportOptions,
) -> Result<()> {
    write_new_report(path, options, |writer| write_report_json_to(writer, rows))?;
    info!(path = %path.display(), rows = rows.len(), "wrote comparison report");
    Ok(())
}

fn open_report(path: &Path, options: &ExportOptions) -> Result<File> {
    let mut open = OpenOptions::new();
    open.write(true);
    if options.overwrite {
        open.create(true).truncate(true);
    } else {
        open.create_new(true);
    }
    open.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            OutputError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            OutputError::io(path, e)
        }
    })
}

/// Opens `path` and runs `write` on it. A failed write removes the file.
fn write_new_report<F>(path: &Path, options: &ExportOptions, write: F) -> Result<()>
where
    F: FnOnce(io::BufWriter<File>) -> Result<()>,
{
    let file = open_report(path, options)?;
    let result = write(io::BufWriter::new(file));
    if result.is_err()
        && let Err(error) = fs::remove_file(path)
    {
        warn!(path = %path.display(), %error, "could not remove partial report");
    }
    result
}
