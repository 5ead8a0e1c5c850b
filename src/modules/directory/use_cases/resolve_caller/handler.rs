use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::User;
use thiserror::Error;

/// Header carrying the caller's chat identifier, set by the mini-app front end.
pub const CALLER_HEADER: &str = "x-telegram-id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid caller credential")]
    InvalidCredential,

    #[error("user not registered")]
    NotRegistered,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub async fn resolve_caller(
    directory: &dyn Directory,
    credential: Option<&str>,
) -> Result<User, AuthError> {
    let telegram_id = credential
        .map(str::trim)
        .and_then(|c| c.parse::<i64>().ok())
        .ok_or(AuthError::InvalidCredential)?;

    directory
        .find_user_by_telegram_id(telegram_id)
        .await
        .map_err(|e| AuthError::Unexpected(e.to_string()))?
        .ok_or(AuthError::NotRegistered)
}

pub fn require_expert(user: &User) -> Result<(), AuthError> {
    if user.is_expert {
        Ok(())
    } else {
        Err(AuthError::Forbidden("only experts have a schedule".into()))
    }
}
