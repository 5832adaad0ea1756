//! Column headers of the input exports and of the comparison report.

/// Table label used in errors for the RCC build export.
pub const BUILD_TABLE: &str = "build";
/// Table label used in errors for the MDR repository export.
pub const REPOSITORY_TABLE: &str = "repository";

/// Worksheet holding the items of an RCC build workbook.
pub const BUILD_SHEET: &str = "Item";
/// Worksheet holding the rows of an MDR repository workbook.
pub const REPOSITORY_SHEET: &str = "Data";

pub const BUILD_FORM_PATH: &str = "RefName Path";
pub const BUILD_VARIABLE_NAME: &str = "Variable Name";

/// Build export columns that must be present before a comparison runs.
pub const BUILD_REQUIRED: [&str; 2] = [BUILD_FORM_PATH, BUILD_VARIABLE_NAME];

pub const REPO_FORM_VERSION: &str = "f_ver";
pub const REPO_FORM_NAME: &str = "mdes_form_name";
pub const REPO_ELEMENT_NAME: &str = "mde_name";
pub const REPO_ITEM_NAME: &str = "item_refname";
pub const REPO_GUIDANCE: &str = "crf_collection_guidance";
pub const REPO_MANDATORY: &str = "mandatory_to_be_collected";
pub const REPO_CONDITIONAL: &str = "mde_is_cond_reqd";
pub const REPO_LIBRARY: &str = "library";
pub const REPO_LATEST: &str = "latest";

/// Repository export columns that must be present before a comparison runs.
pub const REPOSITORY_REQUIRED: [&str; 9] = [
    REPO_FORM_VERSION,
    REPO_FORM_NAME,
    REPO_ELEMENT_NAME,
    REPO_ITEM_NAME,
    REPO_GUIDANCE,
    REPO_MANDATORY,
    REPO_CONDITIONAL,
    REPO_LIBRARY,
    REPO_LATEST,
];

pub const REPORT_FORM_NAME: &str = "Form Name";
pub const REPORT_ITEM: &str = "Item";
pub const REPORT_TYPE: &str = "Type";
pub const REPORT_DESCRIPTION: &str = "Description";
pub const REPORT_CONTEXT: &str = "Context";

/// Report columns in output order.
pub const REPORT_COLUMNS: [&str; 5] = [
    REPORT_FORM_NAME,
    REPORT_ITEM,
    REPORT_TYPE,
    REPORT_DESCRIPTION,
    REPORT_CONTEXT,
];
