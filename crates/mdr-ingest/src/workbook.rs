//! Excel workbook exports.
//!
//! Both tools export `.xlsx` workbooks: the RCC build keeps its items on the
//! `Item` sheet, the MDR repository its rows on the `Data` sheet. A sheet is
//! loaded into the same all-string DataFrame the CSV reader produces.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::polars_utils::format_numeric;
use crate::reader::{frame_from_columns, normalize_cell, normalize_header, read_csv_table};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Whether `path` names a spreadsheet rather than a delimited text export.
pub fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Worksheet names of a workbook, in workbook order.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, &e))?;
    Ok(workbook.sheet_names())
}

/// Reads one worksheet into a DataFrame where every column is a string.
///
/// The first row of the used range is the header. Headers and cells are
/// trimmed, blank rows are skipped and short rows are padded, as for CSV.
/// Fails with `MissingSheet` when the workbook has no sheet named `sheet`.
pub fn read_workbook_sheet(path: &Path, sheet: &str) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, &e))?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(IngestError::MissingSheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| workbook_error(path, &e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell)))
            .collect(),
        None => {
            return Err(IngestError::Workbook {
                path: path.to_path_buf(),
                message: format!("worksheet '{sheet}' is empty"),
            });
        }
    };

    let mut values: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| normalize_cell(&cell_to_string(cell)))
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(cells.get(idx).cloned().unwrap_or_default());
        }
    }

    let df = frame_from_columns(&headers, values).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        sheet,
        rows = df.height(),
        columns = df.width(),
        "loaded workbook sheet"
    );
    Ok(df)
}

/// Loads an export by file type: workbooks read `sheet`, anything else is
/// read as CSV.
pub fn read_export(path: &Path, sheet: &str) -> Result<DataFrame> {
    if is_workbook(path) {
        read_workbook_sheet(path, sheet)
    } else {
        read_csv_table(path)
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(v) => format_numeric(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn workbook_error(path: &Path, error: &impl std::fmt::Display) -> IngestError {
    IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_workbooks_by_extension() {
        assert!(is_workbook(Path::new("exports/rcc.xlsx")));
        assert!(is_workbook(Path::new("MDR.XLSX")));
        assert!(!is_workbook(Path::new("rcc.csv")));
        assert!(!is_workbook(Path::new("rcc")));
    }

    #[test]
    fn numeric_cells_render_without_trailing_zeros() {
        assert_eq!(cell_to_string(&Data::Float(1.0)), "1");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
        assert_eq!(cell_to_string(&Data::Empty), "");
    }
}
