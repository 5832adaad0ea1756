//! Reconciliation of an RCC study build against MDR repository requirements.
//!
//! - **matcher**: longest-prefix resolution of suffixed build identifiers
//! - **filter**: repository scoping (latest, volume, library, required flag, build forms)
//! - **normalize**: form identifiers from build form paths
//! - **reconcile**: fan-out of required items per form instance and the anti-join
//! - **report**: report rows and their table form
//! - **pipeline**: `compare_metadata` and the typed entry points
//!
//! Every entry point is a pure function of its inputs; concurrent runs share
//! nothing.

pub mod error;
pub mod filter;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use error::{CompareError, Result};
pub use filter::filter_repository;
pub use matcher::{IdentifierMatcher, longest_prefix_match, match_identifiers};
pub use normalize::{normalize_build, split_form_id};
pub use pipeline::{Comparison, ComparisonStats, compare_items, compare_metadata, compare_tables};
pub use reconcile::{Reconciliation, annotate_build, reconcile};
pub use report::{format_report, report_to_dataframe};
