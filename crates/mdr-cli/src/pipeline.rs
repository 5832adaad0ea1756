//! Stages of a command-line run: ingest, compare, export.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use mdr_compare::{Comparison, compare_tables};
use mdr_ingest::{is_workbook, read_export, validate_build_table, validate_repository_table};
use mdr_model::CompareConfig;
use mdr_model::columns::{BUILD_SHEET, REPOSITORY_SHEET};
use mdr_output::{
    ExportOptions, default_export_dir, timestamped_export_path, write_report_csv,
    write_report_json,
};

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Both exports loaded as tables.
#[derive(Debug)]
pub struct IngestResult {
    pub build: DataFrame,
    pub repository: DataFrame,
}

/// Row and column counts of a loaded export, for the check summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    pub label: &'static str,
    pub path: PathBuf,
    /// Worksheet read, for workbook exports.
    pub sheet: Option<&'static str>,
    pub rows: usize,
    pub columns: usize,
}

/// Loads both exports, reading workbooks by their fixed sheet names and
/// anything else as CSV.
pub fn ingest(build_path: &Path, repository_path: &Path) -> Result<IngestResult> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let start = Instant::now();
    let build = read_export(build_path, BUILD_SHEET)
        .with_context(|| format!("load build export {}", build_path.display()))?;
    let repository = read_export(repository_path, REPOSITORY_SHEET)
        .with_context(|| format!("load repository export {}", repository_path.display()))?;
    info!(
        build_rows = build.height(),
        repository_rows = repository.height(),
        duration_ms = start.elapsed().as_millis(),
        "exports loaded"
    );
    Ok(IngestResult { build, repository })
}

/// Validates the required columns of both exports without comparing them.
pub fn check(build_path: &Path, repository_path: &Path) -> Result<Vec<TableShape>> {
    let tables = ingest(build_path, repository_path)?;
    validate_build_table(&tables.build).context("build export")?;
    validate_repository_table(&tables.repository).context("repository export")?;
    Ok(vec![
        TableShape {
            label: "RCC build",
            path: build_path.to_path_buf(),
            sheet: is_workbook(build_path).then_some(BUILD_SHEET),
            rows: tables.build.height(),
            columns: tables.build.width(),
        },
        TableShape {
            label: "MDR repository",
            path: repository_path.to_path_buf(),
            sheet: is_workbook(repository_path).then_some(REPOSITORY_SHEET),
            rows: tables.repository.height(),
            columns: tables.repository.width(),
        },
    ])
}

pub fn compare(tables: &IngestResult, config: &CompareConfig) -> Result<Comparison> {
    compare_tables(&tables.build, &tables.repository, config).context("compare metadata")
}

/// Where the report of one run is written.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Exact report path.
    pub output: Option<PathBuf>,
    /// Directory for a timestamped report name.
    pub output_dir: Option<PathBuf>,
    pub format: ExportFormat,
    pub options: ExportOptions,
}

/// Report path for a run started at `now`.
///
/// An explicit path wins; otherwise a timestamped name is placed in
/// `output_dir`, or next to the build export.
pub fn resolve_output_path<Tz>(
    build_path: &Path,
    output: &OutputConfig,
    now: &DateTime<Tz>,
) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if let Some(path) = &output.output {
        return path.clone();
    }
    let dir = output
        .output_dir
        .clone()
        .unwrap_or_else(|| default_export_dir(build_path));
    timestamped_export_path(&dir, now).with_extension(output.format.extension())
}

/// Writes the report to `path` in the configured format.
pub fn export(comparison: &Comparison, path: &Path, output: &OutputConfig) -> Result<()> {
    let written = match output.format {
        ExportFormat::Csv => write_report_csv(path, &comparison.rows, &output.options),
        ExportFormat::Json => write_report_json(path, &comparison.rows, &output.options),
    };
    written.with_context(|| format!("write report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn explicit_output_wins() {
        let output = OutputConfig {
            output: Some(PathBuf::from("/tmp/report.csv")),
            output_dir: Some(PathBuf::from("/elsewhere")),
            ..OutputConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            resolve_output_path(Path::new("/data/rcc.csv"), &output, &now),
            PathBuf::from("/tmp/report.csv")
        );
    }

    #[test]
    fn json_reports_get_json_extension() {
        let output = OutputConfig {
            format: ExportFormat::Json,
            ..OutputConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            resolve_output_path(Path::new("/data/rcc.csv"), &output, &now),
            PathBuf::from("/data/MDRComparisonOutput_2025_01_02_03_04_05.json")
        );
    }
}
