use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

impl OutputError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OutputError>;
