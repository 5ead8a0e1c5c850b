use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::{Value, json};

use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shared::core::primitives::SlotId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Caller(attendee): Caller,
    slot_id: Result<Path<SlotId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(slot_id) = slot_id?;
    state.cancel_booking.handle(&attendee, slot_id).await?;
    Ok(Json(json!({ "cancelled": true })))
}
