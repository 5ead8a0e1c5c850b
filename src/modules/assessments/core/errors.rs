use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("result not found")]
    NotFound,

    #[error("already completed")]
    AlreadyCompleted,

    #[error("gift already received")]
    GiftAlreadyReceived,

    #[error("backend error: {0}")]
    Backend(String),
}

impl From<anyhow::Error> for AssessmentError {
    fn from(error: anyhow::Error) -> Self {
        AssessmentError::Backend(error.to_string())
    }
}
