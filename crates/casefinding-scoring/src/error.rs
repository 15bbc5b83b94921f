use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("scoring request failed: {0}")]
    Transport(String),

    #[error("scoring service returned HTTP {0}")]
    Status(u16),

    #[error("response did not conform to expected schema: {0}")]
    MalformedResponse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid scoring config: {0}")]
    Config(String),
}

impl From<ureq::Error> for ScoringError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ScoringError::Status(status),
            other => ScoringError::Transport(other.to_string()),
        }
    }
}
