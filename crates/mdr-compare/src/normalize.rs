//! Build export normalization.

use mdr_model::{BuildItem, RawBuildRow};

/// Form identifier of a raw `RefName Path`: everything before the first
/// `delimiter`. An empty delimiter leaves the path untouched.
pub fn split_form_id<'a>(path: &'a str, delimiter: &str) -> &'a str {
    if delimiter.is_empty() {
        return path;
    }
    match path.split_once(delimiter) {
        Some((form_id, _)) => form_id,
        None => path,
    }
}

/// One unresolved [`BuildItem`] per raw row; duplicates are kept.
pub fn normalize_build(rows: &[RawBuildRow], delimiter: &str) -> Vec<BuildItem> {
    rows.iter()
        .map(|row| BuildItem {
            form_path: row.path.clone(),
            form_id: split_form_id(&row.path, delimiter).to_string(),
            variable_name: row.variable.clone(),
            matched_form_name: None,
            matched_item_name: None,
        })
        .collect()
}
