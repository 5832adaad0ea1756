//! Anti-join of required repository items against the build.
//!
//! Every distinct build form instance (`AE001`, `AE001_1`) is expanded into
//! the required items of the canonical form it resolves to. An expanded pair
//! is missing when no build row of that instance resolves to the item.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use mdr_model::{BuildItem, RepositoryItem, RequiredPair};

use crate::matcher::IdentifierMatcher;

/// Counts from enriching build items with canonical names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationStats {
    pub unmatched_forms: usize,
    pub unmatched_items: usize,
}

/// Fills `matched_form_name` from `form_id` and `matched_item_name` from
/// `variable_name`, each against its own candidate set.
pub fn annotate_build(
    items: &mut [BuildItem],
    forms: &IdentifierMatcher,
    item_names: &IdentifierMatcher,
) -> AnnotationStats {
    let mut stats = AnnotationStats::default();
    for item in items.iter_mut() {
        item.matched_form_name = forms.resolve(&item.form_id).map(str::to_string);
        item.matched_item_name = item_names.resolve(&item.variable_name).map(str::to_string);
        if item.matched_form_name.is_none() {
            stats.unmatched_forms += 1;
        }
        if item.matched_item_name.is_none() {
            stats.unmatched_items += 1;
        }
        if !item.is_resolved() {
            trace!(
                form_id = %item.form_id,
                variable_name = %item.variable_name,
                "build row does not resolve against the repository"
            );
        }
    }
    stats
}

/// Build form instances mapped to the canonical form they resolve to.
///
/// A form instance counts as soon as its `form_id` resolves, even when none
/// of its variables do; every required item is then missing from it.
pub fn form_instances(items: &[BuildItem]) -> BTreeMap<&str, &str> {
    let mut instances = BTreeMap::new();
    for item in items {
        if let Some(form) = &item.matched_form_name {
            instances.entry(item.form_id.as_str()).or_insert(form.as_str());
        }
    }
    instances
}

/// Every required `(form instance, item)` pair implied by the build.
pub fn required_pairs(items: &[BuildItem], repository: &[RepositoryItem]) -> Vec<RequiredPair> {
    let mut by_form: BTreeMap<&str, Vec<&RepositoryItem>> = BTreeMap::new();
    for row in repository {
        by_form.entry(row.form_name.as_str()).or_default().push(row);
    }

    let mut pairs = Vec::new();
    for (form_id, form_name) in form_instances(items) {
        let Some(rows) = by_form.get(form_name) else {
            continue;
        };
        for row in rows {
            pairs.push(RequiredPair {
                form_id: form_id.to_string(),
                item_name: row.item_name.clone(),
                guidance: row.guidance.clone(),
                conditionally_required: row.conditionally_required,
            });
        }
    }
    pairs.sort();
    pairs.dedup_by(|a, b| a.key() == b.key());
    pairs
}

/// `(form_id, matched_item_name)` pairs actually present in the build.
pub fn present_pairs(items: &[BuildItem]) -> BTreeSet<(&str, &str)> {
    items
        .iter()
        .filter(|item| item.matched_form_name.is_some())
        .filter_map(|item| {
            item.matched_item_name
                .as_deref()
                .map(|name| (item.form_id.as_str(), name))
        })
        .collect()
}

/// Outcome of reconciling one build against the filtered repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Distinct build form instances that resolved to a repository form.
    pub form_instances: usize,
    /// Required pairs before subtracting what the build collects.
    pub required_pairs: usize,
    /// Required pairs with no matching build row, ordered by form then item.
    pub missing: Vec<RequiredPair>,
}

/// Subtracts the pairs present in the build from the required pairs.
pub fn reconcile(items: &[BuildItem], repository: &[RepositoryItem]) -> Reconciliation {
    let instances = form_instances(items).len();
    let required = required_pairs(items, repository);
    let required_count = required.len();
    let present = present_pairs(items);
    let missing: Vec<RequiredPair> = required
        .into_iter()
        .filter(|pair| !present.contains(&pair.key()))
        .collect();
    Reconciliation {
        form_instances: instances,
        required_pairs: required_count,
        missing,
    }
}
