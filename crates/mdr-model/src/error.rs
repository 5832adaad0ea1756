use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid comparison config: {message}")]
    InvalidConfig { message: String },
    #[error("unknown missing-item type '{value}'")]
    UnknownKind { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
