use serde::{Deserialize, Serialize};

/// One raw row of the RCC build export, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBuildRow {
    /// `RefName Path`, e.g. `AE001_1 >> Adverse Events`.
    pub path: String,
    /// `Variable Name`.
    pub variable: String,
}

impl RawBuildRow {
    pub fn new(path: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            variable: variable.into(),
        }
    }
}

/// A normalized build row, optionally enriched with the canonical names it
/// resolves to in the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildItem {
    /// Raw form path as exported.
    pub form_path: String,
    /// Form path truncated at the first delimiter.
    pub form_id: String,
    pub variable_name: String,
    /// Canonical form the `form_id` resolves to.
    pub matched_form_name: Option<String>,
    /// Canonical item the `variable_name` resolves to.
    pub matched_item_name: Option<String>,
}

impl BuildItem {
    /// Both identifiers resolved against the repository.
    pub fn is_resolved(&self) -> bool {
        self.matched_form_name.is_some() && self.matched_item_name.is_some()
    }
}
