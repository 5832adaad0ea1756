//! Shared data model for comparing MDR repository metadata against an RCC
//! study build export.

pub mod build;
pub mod columns;
pub mod error;
pub mod options;
pub mod report;
pub mod repository;

pub use build::{BuildItem, RawBuildRow};
pub use error::{ModelError, Result};
pub use options::{CompareConfig, DEFAULT_PATH_DELIMITER, DEFAULT_VOLUME_MARKER};
pub use report::{MissingField, MissingKind, RequiredPair};
pub use repository::RepositoryItem;
