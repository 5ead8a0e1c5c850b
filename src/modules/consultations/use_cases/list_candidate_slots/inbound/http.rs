use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::consultations::core::views::CandidateView;
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shared::core::primitives::TopicId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCandidateSlotsParams {
    pub topic_id: TopicId,
}

pub async fn handle(
    State(state): State<AppState>,
    _caller: Caller,
    params: Result<Query<ListCandidateSlotsParams>, QueryRejection>,
) -> Result<Json<Vec<CandidateView>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.list_candidates.handle(params.topic_id).await?))
}
