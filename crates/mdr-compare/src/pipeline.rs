//! Comparison entry points.
//!
//! Stages run in a fixed order: the raw build form paths scope the
//! repository, the scoped repository supplies the canonical form and item
//! names, and only then are build rows resolved and reconciled.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use mdr_ingest::{
    build_rows_from_frame, repository_items_from_frame, validate_build_table,
    validate_repository_table,
};
use mdr_model::{CompareConfig, MissingField, MissingKind, RawBuildRow, RepositoryItem};

use crate::error::Result;
use crate::filter::filter_repository;
use crate::matcher::IdentifierMatcher;
use crate::normalize::normalize_build;
use crate::reconcile::{annotate_build, reconcile};
use crate::report::{format_report, report_to_dataframe};

/// Counts collected while a comparison runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonStats {
    pub build_rows: usize,
    pub repository_rows: usize,
    /// Repository rows left after scoping to volume, library, flags and build forms.
    pub repository_in_scope: usize,
    pub unmatched_forms: usize,
    pub unmatched_items: usize,
    pub form_instances: usize,
    pub required_pairs: usize,
    pub missing: usize,
}

/// Result of a comparison run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub rows: Vec<MissingField>,
    pub stats: ComparisonStats,
}

impl Comparison {
    /// No required item is missing from the build.
    pub fn is_clean(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count_kind(&self, kind: MissingKind) -> usize {
        self.rows.iter().filter(|row| row.kind == kind).count()
    }

    /// The report as a `Form Name, Item, Type, Description, Context` table.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        report_to_dataframe(&self.rows)
    }
}

/// Compares typed build and repository rows.
pub fn compare_items(
    build_rows: &[RawBuildRow],
    repository_rows: &[RepositoryItem],
    config: &CompareConfig,
) -> Result<Comparison> {
    config.validate()?;
    let span = info_span!(
        "compare",
        build_rows = build_rows.len(),
        repository_rows = repository_rows.len()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let scoped = filter_repository(
        repository_rows,
        build_rows.iter().map(|row| row.path.as_str()),
        config,
    );
    let forms = IdentifierMatcher::new(scoped.iter().map(|row| row.form_name.as_str()));
    let items = IdentifierMatcher::new(scoped.iter().map(|row| row.item_name.as_str()));
    debug!(
        forms = forms.len(),
        items = items.len(),
        "canonical identifiers in scope"
    );

    let mut build = normalize_build(build_rows, &config.path_delimiter);
    let annotation = annotate_build(&mut build, &forms, &items);
    let reconciliation = reconcile(&build, &scoped);
    let rows = format_report(reconciliation.missing);

    let stats = ComparisonStats {
        build_rows: build_rows.len(),
        repository_rows: repository_rows.len(),
        repository_in_scope: scoped.len(),
        unmatched_forms: annotation.unmatched_forms,
        unmatched_items: annotation.unmatched_items,
        form_instances: reconciliation.form_instances,
        required_pairs: reconciliation.required_pairs,
        missing: rows.len(),
    };
    info!(
        repository_in_scope = stats.repository_in_scope,
        form_instances = stats.form_instances,
        required_pairs = stats.required_pairs,
        missing = stats.missing,
        duration_ms = start.elapsed().as_millis(),
        "comparison complete"
    );
    Ok(Comparison { rows, stats })
}

/// Compares a build export table against a repository export table.
///
/// Both tables are checked for their required columns before anything else
/// runs; a missing column fails the whole call.
pub fn compare_tables(
    build: &DataFrame,
    repository: &DataFrame,
    config: &CompareConfig,
) -> Result<Comparison> {
    validate_build_table(build)?;
    validate_repository_table(repository)?;
    let build_rows = build_rows_from_frame(build)?;
    let repository_rows = repository_items_from_frame(repository)?;
    compare_items(&build_rows, &repository_rows, config)
}

/// Compares two export tables and returns the missing-items report table.
pub fn compare_metadata(
    build: &DataFrame,
    repository: &DataFrame,
    config: &CompareConfig,
) -> Result<DataFrame> {
    compare_tables(build, repository, config)?.to_dataframe()
}
