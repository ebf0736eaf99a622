use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unrecognised storage key: {0}")]
    InvalidKey(String),

    #[error("assessment sink failed: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}
