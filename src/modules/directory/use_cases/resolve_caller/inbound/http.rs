use axum::{Json, extract::FromRequestParts, http::request::Parts};

use crate::modules::directory::core::user::User;
use crate::modules::directory::use_cases::resolve_caller::handler::{CALLER_HEADER, resolve_caller};
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

/// The registered user behind the request. Rejects before the handler runs.
#[derive(Debug, Clone)]
pub struct Caller(pub User);

impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let credential = parts
            .headers
            .get(CALLER_HEADER)
            .and_then(|value| value.to_str().ok());
        let user = resolve_caller(&*state.directory, credential).await?;
        Ok(Caller(user))
    }
}

pub async fn verify(Caller(user): Caller) -> Json<User> {
    tracing::debug!(user_id = %user.id, "caller verified");
    Json(user)
}
