use axum::{Json, extract::State};

use crate::modules::consultations::core::views::TopicView;
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Json<Vec<TopicView>>, ApiError> {
    Ok(Json(state.list_topics.handle().await?))
}
