//! Required-column validation and typed row extraction for both exports.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use mdr_model::columns::{
    BUILD_FORM_PATH, BUILD_REQUIRED, BUILD_TABLE, BUILD_VARIABLE_NAME, REPO_CONDITIONAL,
    REPO_ELEMENT_NAME, REPO_FORM_NAME, REPO_FORM_VERSION, REPO_GUIDANCE, REPO_ITEM_NAME,
    REPO_LATEST, REPO_LIBRARY, REPO_MANDATORY, REPOSITORY_REQUIRED, REPOSITORY_TABLE,
};
use mdr_model::{RawBuildRow, RepositoryItem};

use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_string, parse_flag};

/// Fails with `MissingColumn` for the first required column absent from `df`.
pub fn require_columns(df: &DataFrame, table: &str, required: &[&str]) -> Result<()> {
    for column in required {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                table: table.to_string(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

/// Validates that the build export has every column the comparison reads.
pub fn validate_build_table(df: &DataFrame) -> Result<()> {
    require_columns(df, BUILD_TABLE, &BUILD_REQUIRED)
}

/// Validates that the repository export has every column the comparison reads.
pub fn validate_repository_table(df: &DataFrame) -> Result<()> {
    require_columns(df, REPOSITORY_TABLE, &REPOSITORY_REQUIRED)
}

fn column_strings(df: &DataFrame, table: &str, name: &str) -> Result<Vec<String>> {
    let column = df.column(name).map_err(|_| IngestError::MissingColumn {
        table: table.to_string(),
        column: name.to_string(),
    })?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

fn column_flags(df: &DataFrame, table: &str, name: &str) -> Result<Vec<bool>> {
    column_strings(df, table, name)?
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            parse_flag(&raw).ok_or_else(|| IngestError::MalformedInput {
                table: table.to_string(),
                column: name.to_string(),
                // 1-based data row, header excluded
                row: idx + 1,
                value: raw,
            })
        })
        .collect()
}

/// Reads `(RefName Path, Variable Name)` pairs from the build export.
pub fn build_rows_from_frame(df: &DataFrame) -> Result<Vec<RawBuildRow>> {
    validate_build_table(df)?;
    let paths = column_strings(df, BUILD_TABLE, BUILD_FORM_PATH)?;
    let variables = column_strings(df, BUILD_TABLE, BUILD_VARIABLE_NAME)?;
    let rows: Vec<RawBuildRow> = paths
        .into_iter()
        .zip(variables)
        .map(|(path, variable)| RawBuildRow { path, variable })
        .collect();
    debug!(rows = rows.len(), "read build rows");
    Ok(rows)
}

/// Reads repository rows from the MDR export.
///
/// Flag columns must hold recognizable yes/no values; anything else is a
/// `MalformedInput` error naming the column and row.
pub fn repository_items_from_frame(df: &DataFrame) -> Result<Vec<RepositoryItem>> {
    validate_repository_table(df)?;
    let table = REPOSITORY_TABLE;
    let versions = column_strings(df, table, REPO_FORM_VERSION)?;
    let forms = column_strings(df, table, REPO_FORM_NAME)?;
    let elements = column_strings(df, table, REPO_ELEMENT_NAME)?;
    let items = column_strings(df, table, REPO_ITEM_NAME)?;
    let guidance = column_strings(df, table, REPO_GUIDANCE)?;
    let mandatory = column_flags(df, table, REPO_MANDATORY)?;
    let conditional = column_flags(df, table, REPO_CONDITIONAL)?;
    let libraries = column_strings(df, table, REPO_LIBRARY)?;
    let latest = column_flags(df, table, REPO_LATEST)?;

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let guidance = guidance[idx].clone();
        rows.push(RepositoryItem {
            form_version: versions[idx].clone(),
            form_name: forms[idx].clone(),
            element_name: elements[idx].clone(),
            item_name: items[idx].clone(),
            guidance: if guidance.is_empty() {
                None
            } else {
                Some(guidance)
            },
            mandatory: mandatory[idx],
            conditionally_required: conditional[idx],
            library: libraries[idx].clone(),
            is_latest: latest[idx],
        });
    }
    debug!(rows = rows.len(), "read repository rows");
    Ok(rows)
}
