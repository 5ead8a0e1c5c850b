use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::modules::consultations::use_cases::book_slot::command::BookSlotRequest;
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shared::core::primitives::SlotId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct BookSlotResponse {
    pub slot_id: SlotId,
}

pub async fn handle(
    State(state): State<AppState>,
    Caller(attendee): Caller,
    body: Result<Json<BookSlotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookSlotResponse>), ApiError> {
    let Json(request) = body?;
    let slot_id = state.book_slot.handle(&attendee, request).await?;
    Ok((StatusCode::CREATED, Json(BookSlotResponse { slot_id })))
}
