use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("assessment not found: {0}")]
    AssessmentNotFound(u32),

    #[error("evaluation not found: {0}")]
    EvaluationNotFound(String),

    #[error("invalid house number: {0}")]
    InvalidHouseNumber(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<ureq::Error> for ServiceError {
    fn from(e: ureq::Error) -> Self {
        ServiceError::Http(e.to_string())
    }
}
