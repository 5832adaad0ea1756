//! CSV export loading into string-typed Polars DataFrames.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::{IngestError, Result};

pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Reads a CSV export into a DataFrame where every column is a string.
///
/// The first row is the header. Headers and cells are trimmed, rows that are
/// entirely blank are skipped and short rows are padded with empty cells.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| csv_error(path, &e))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };

    let mut values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in records {
        let record = record.map_err(|e| csv_error(path, &e))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
    }

    let df = frame_from_columns(&headers, values).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded export"
    );
    Ok(df)
}

/// Builds a string DataFrame from column headers and column-major values.
pub fn frame_from_columns(headers: &[String], values: Vec<Vec<String>>) -> Result<DataFrame> {
    let columns: Vec<Column> = headers
        .iter()
        .zip(values)
        .map(|(name, column)| Series::new(name.as_str().into(), column).into_column())
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_trims_headers_and_cells() {
        let file = create_temp_csv("\u{feff}RefName Path , Variable Name\n AE001 >> AE , AETERM \n");
        let df = read_csv_table(file.path()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["RefName Path", "Variable Name"]);
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_read_skips_blank_rows_and_pads_short_rows() {
        let file = create_temp_csv("A,B\n1,2\n,\n3\n");
        let df = read_csv_table(file.path()).unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/export.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_duplicate_headers_are_parse_errors() {
        let file = create_temp_csv("A,A\n1,2\n");
        let result = read_csv_table(file.path());
        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }
}
