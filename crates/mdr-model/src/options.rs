//! Configuration for a comparison run.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Delimiter between the form identifier and the rest of a build form path.
pub const DEFAULT_PATH_DELIMITER: &str = " >> ";

/// Volume tag the repository rows must carry in `f_ver`.
pub const DEFAULT_VOLUME_MARKER: &str = "Volume 3";

/// Options controlling which repository rows are compared and how build
/// paths are split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    /// Substring `f_ver` must contain for a repository row to be in scope.
    pub volume_marker: String,

    /// Libraries whose items are in scope. Empty means every library.
    pub allowed_libraries: BTreeSet<String>,

    /// Delimiter separating the form identifier from the trailing path
    /// segment in `RefName Path`. Empty disables splitting.
    pub path_delimiter: String,

    /// Also compare items that are only conditionally required.
    ///
    /// Default: false (only `mandatory_to_be_collected` rows are in scope).
    pub include_conditionally_required: bool,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            volume_marker: DEFAULT_VOLUME_MARKER.to_string(),
            allowed_libraries: BTreeSet::new(),
            path_delimiter: DEFAULT_PATH_DELIMITER.to_string(),
            include_conditionally_required: false,
        }
    }
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_volume_marker(mut self, marker: impl Into<String>) -> Self {
        self.volume_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_libraries<I, S>(mut self, libraries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_libraries = libraries.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_path_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.path_delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_conditionally_required(mut self, enable: bool) -> Self {
        self.include_conditionally_required = enable;
        self
    }

    /// Whether `library` passes the library restriction.
    pub fn allows_library(&self, library: &str) -> bool {
        self.allowed_libraries.is_empty() || self.allowed_libraries.contains(library)
    }

    /// Reject configurations that can never match anything.
    pub fn validate(&self) -> Result<()> {
        if let Some(blank) = self
            .allowed_libraries
            .iter()
            .find(|library| library.trim().is_empty())
        {
            return Err(ModelError::InvalidConfig {
                message: format!("blank library name '{blank}'"),
            });
        }
        Ok(())
    }
}
