use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid input, try again! ({0})")]
    InvalidInput(String),

    #[error("Invalid people count: {0}")]
    InvalidPeople(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Unsupported drag payload kind: {0}")]
    UnsupportedPayloadKind(String),

    #[error("Drag payload is empty")]
    EmptyPayload,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
