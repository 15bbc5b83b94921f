use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid sex: {0:?} (expected \"M\" or \"F\")")]
    InvalidSex(String),
}
