//! Longest-prefix resolution of build identifiers to canonical names.
//!
//! Build exports suffix repository identifiers per study (`AE001_1`,
//! `AESTDAT_2`). An observed identifier resolves to the longest canonical
//! identifier that is an exact, case-sensitive prefix of it, so `AE001_1`
//! wins over `AE001` when both are canonical.
//!
//! Equal-length maxima resolve to the lexicographically smallest candidate.
//! Two distinct candidates of equal length cannot both prefix the same
//! string, so with a deduplicated candidate set this only fixes behavior.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A reusable candidate set, ordered longest first.
#[derive(Debug, Clone, Default)]
pub struct IdentifierMatcher {
    candidates: Vec<String>,
}

impl IdentifierMatcher {
    /// Builds a matcher from canonical identifiers. Duplicates and empty
    /// strings are dropped.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = candidates
            .into_iter()
            .map(Into::into)
            .filter(|candidate| !candidate.is_empty())
            .collect();
        let mut candidates: Vec<String> = unique.into_iter().collect();
        candidates.sort_by(|a, b| by_specificity(a, b));
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The most specific candidate prefixing `observed`, if any.
    pub fn resolve(&self, observed: &str) -> Option<&str> {
        // Candidates are sorted longest first, smallest first within a length.
        self.candidates
            .iter()
            .map(String::as_str)
            .find(|candidate| observed.starts_with(candidate))
    }
}

/// Longest then lexicographically smallest.
fn by_specificity(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}

/// Resolves a single identifier against `candidates`.
///
/// Step one collects every candidate that prefixes `observed`; step two
/// reduces that set to the longest entry.
pub fn longest_prefix_match<'a>(candidates: &'a BTreeSet<String>, observed: &str) -> Option<&'a str> {
    candidates
        .iter()
        .map(String::as_str)
        .filter(|candidate| !candidate.is_empty() && observed.starts_with(candidate))
        .min_by(|a, b| by_specificity(a, b))
}

/// Resolves every observed identifier, one entry per distinct identifier.
pub fn match_identifiers<'o, I>(
    candidates: &BTreeSet<String>,
    observed: I,
) -> BTreeMap<String, Option<String>>
where
    I: IntoIterator<Item = &'o str>,
{
    let matcher = IdentifierMatcher::new(candidates.iter().cloned());
    let mut resolved = BTreeMap::new();
    for identifier in observed {
        resolved
            .entry(identifier.to_string())
            .or_insert_with(|| matcher.resolve(identifier).map(str::to_string));
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn prefers_longer_candidate() {
        let candidates = set(&["AE001", "AE001_1"]);
        assert_eq!(
            longest_prefix_match(&candidates, "AE001_1_ITEM"),
            Some("AE001_1")
        );
        assert_eq!(longest_prefix_match(&candidates, "AE001_2"), Some("AE001"));
    }

    #[test]
    fn unmatched_is_none() {
        let candidates = set(&["AE001", "DM001"]);
        assert_eq!(longest_prefix_match(&candidates, "VS001"), None);
        // Prefix match only, never a substring elsewhere.
        assert_eq!(longest_prefix_match(&candidates, "XAE001"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let candidates = set(&["AE001"]);
        assert_eq!(longest_prefix_match(&candidates, "ae001_1"), None);
    }

    #[test]
    fn exact_identifier_matches_itself() {
        let candidates = set(&["DM001"]);
        assert_eq!(longest_prefix_match(&candidates, "DM001"), Some("DM001"));
    }

    #[test]
    fn empty_candidate_never_matches() {
        let candidates = set(&["", "AE"]);
        assert_eq!(longest_prefix_match(&candidates, "VS001"), None);
        let matcher = IdentifierMatcher::new(["", "AE"]);
        assert_eq!(matcher.len(), 1);
        assert_eq!(matcher.resolve("VS001"), None);
    }

    #[test]
    fn equal_length_tie_picks_smallest() {
        assert_eq!(by_specificity("AB", "AA"), Ordering::Greater);
        assert_eq!(by_specificity("AA", "AB"), Ordering::Less);
        assert_eq!(by_specificity("ABC", "AA"), Ordering::Less);

        // Duplicate candidates collapse; the single survivor is returned.
        let matcher = IdentifierMatcher::new(["AE001", "AE001", "AE"]);
        assert_eq!(matcher.len(), 2);
        assert_eq!(matcher.resolve("AE001_1"), Some("AE001"));
    }

    #[test]
    fn matcher_agrees_with_single_lookup() {
        let candidates = set(&["AE", "AE001", "AE001_1", "AESTDAT", "AESTDAT_OTH"]);
        let matcher = IdentifierMatcher::new(candidates.iter().cloned());
        for observed in ["AE001_1", "AE001_10", "AE0", "AESTDAT_OTH2", "AESTDAT1", "CM001"] {
            assert_eq!(
                matcher.resolve(observed),
                longest_prefix_match(&candidates, observed),
                "observed {observed}"
            );
        }
    }

    #[test]
    fn match_identifiers_dedupes_observed() {
        let candidates = set(&["AE001", "AE001_1"]);
        let resolved = match_identifiers(&candidates, ["AE001_1", "AE001_1", "AE001_2", "CM001"]);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved["AE001_1"].as_deref(), Some("AE001_1"));
        assert_eq!(resolved["AE001_2"].as_deref(), Some("AE001"));
        assert_eq!(resolved["CM001"], None);
    }
}
