use std::path::PathBuf;

use mdr_compare::Comparison;
use mdr_model::CompareConfig;

#[derive(Debug)]
pub struct CompareResult {
    pub build: PathBuf,
    pub repository: PathBuf,
    pub config: CompareConfig,
    pub comparison: Comparison,
    /// Report file written, if any.
    pub report: Option<PathBuf>,
}
