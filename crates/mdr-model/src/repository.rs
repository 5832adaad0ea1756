use serde::{Deserialize, Serialize};

/// One row of the MDR repository export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryItem {
    /// Release/volume tag (`f_ver`).
    pub form_version: String,
    /// Canonical form identifier (`mdes_form_name`).
    pub form_name: String,
    /// Data element name (`mde_name`).
    pub element_name: String,
    /// Canonical item identifier within the form (`item_refname`).
    pub item_name: String,
    /// Free-text collection guidance (`crf_collection_guidance`).
    pub guidance: Option<String>,
    /// `mandatory_to_be_collected`.
    pub mandatory: bool,
    /// `mde_is_cond_reqd`.
    pub conditionally_required: bool,
    pub library: String,
    /// `latest`.
    pub is_latest: bool,
}

impl RepositoryItem {
    /// Whether the item must be collected in every instance of its form.
    ///
    /// Conditionally required items only count when `include_conditional` is
    /// set; mandatory items always count.
    pub fn is_required(&self, include_conditional: bool) -> bool {
        self.mandatory || (include_conditional && self.conditionally_required)
    }

    /// `(form_name, item_name)` key identifying the item across versions.
    pub fn key(&self) -> (&str, &str) {
        (&self.form_name, &self.item_name)
    }
}
