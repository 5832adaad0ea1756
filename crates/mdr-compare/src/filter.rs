//! Repository scoping: which MDR rows take part in a comparison.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::{debug, warn};

use mdr_model::{CompareConfig, RepositoryItem};

/// Selects the repository rows that are required for the current build.
///
/// Rows are kept when they are the latest version, carry the configured
/// volume marker in `form_version`, belong to an allowed library, are
/// required (mandatory, or conditionally required when configured), and
/// their `form_name` prefixes at least one raw build form path.
///
/// The result is ordered by `form_name` descending, then `item_name`, and
/// holds at most one row per `(form_name, item_name)`; later duplicates are
/// dropped with a warning.
pub fn filter_repository<'p, I>(
    rows: &[RepositoryItem],
    build_form_paths: I,
    config: &CompareConfig,
) -> Vec<RepositoryItem>
where
    I: IntoIterator<Item = &'p str>,
{
    let build_paths: BTreeSet<&str> = build_form_paths.into_iter().collect();

    let mut kept: Vec<RepositoryItem> = rows
        .iter()
        .filter(|row| row.is_latest)
        .filter(|row| row.form_version.contains(config.volume_marker.as_str()))
        .filter(|row| config.allows_library(&row.library))
        .filter(|row| row.is_required(config.include_conditionally_required))
        .filter(|row| !row.form_name.is_empty() && !row.item_name.is_empty())
        .filter(|row| {
            build_paths
                .iter()
                .any(|path| path.starts_with(row.form_name.as_str()))
        })
        .cloned()
        .collect();

    // Stable sort keeps the export order among rows sharing a key.
    kept.sort_by(|a, b| match b.form_name.cmp(&a.form_name) {
        Ordering::Equal => a.item_name.cmp(&b.item_name),
        other => other,
    });

    let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
    let mut duplicates = 0usize;
    kept.retain(|row| {
        let fresh = seen.insert((row.form_name.clone(), row.item_name.clone()));
        if !fresh {
            duplicates += 1;
            debug!(
                form_name = %row.form_name,
                item_name = %row.item_name,
                element_name = %row.element_name,
                form_version = %row.form_version,
                "dropping duplicate repository row"
            );
        }
        fresh
    });
    if duplicates > 0 {
        warn!(
            duplicates,
            "repository export has several latest rows for the same form item"
        );
    }

    debug!(
        input_rows = rows.len(),
        kept_rows = kept.len(),
        "filtered repository"
    );
    kept
}
