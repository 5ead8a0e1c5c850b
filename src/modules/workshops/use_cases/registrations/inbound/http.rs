use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::modules::workshops::core::workshop::{Registration, WorkshopView};
use crate::shared::core::primitives::WorkshopId;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<Vec<WorkshopView>>, ApiError> {
    Ok(Json(state.workshops.list(&caller).await?))
}

pub async fn my(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<Vec<WorkshopView>>, ApiError> {
    Ok(Json(state.workshops.my(&caller).await?))
}

pub async fn register(
    State(state): State<AppState>,
    Caller(caller): Caller,
    workshop_id: Result<Path<WorkshopId>, PathRejection>,
) -> Result<(StatusCode, Json<Registration>), ApiError> {
    let Path(workshop_id) = workshop_id?;
    let registration = state.workshops.register(&caller, workshop_id).await?;
    Ok((StatusCode::CREATED, Json(registration)))
}

pub async fn cancel(
    State(state): State<AppState>,
    Caller(caller): Caller,
    workshop_id: Result<Path<WorkshopId>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let Path(workshop_id) = workshop_id?;
    state.workshops.cancel(&caller, workshop_id).await?;
    Ok(Json(json!({ "cancelled": true })))
}
