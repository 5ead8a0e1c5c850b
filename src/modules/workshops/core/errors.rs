use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkshopError {
    #[error("workshop not found")]
    NotFound,

    #[error("already registered for this workshop")]
    AlreadyRegistered,

    #[error("registration limit reached: at most {limit} workshop(s) per participant")]
    LimitReached { limit: usize },

    #[error("backend error: {0}")]
    Backend(String),
}
