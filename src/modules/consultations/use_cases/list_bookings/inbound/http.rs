use axum::{Json, extract::State};
use serde::Serialize;

use crate::modules::consultations::core::views::BookingView;
use crate::modules::consultations::use_cases::list_bookings::schedule_text::render_schedule;
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ExpertScheduleResponse {
    pub bookings: Vec<BookingView>,
    pub text: String,
}

pub async fn my_bookings(
    State(state): State<AppState>,
    Caller(attendee): Caller,
) -> Result<Json<Vec<BookingView>>, ApiError> {
    Ok(Json(state.list_bookings.my_bookings(&attendee).await?))
}

pub async fn expert_schedule(
    State(state): State<AppState>,
    Caller(expert): Caller,
) -> Result<Json<ExpertScheduleResponse>, ApiError> {
    let bookings = state.list_bookings.expert_schedule(&expert).await?;
    let text = render_schedule(&bookings);
    Ok(Json(ExpertScheduleResponse { bookings, text }))
}

#[cfg(test)]
mod list_bookings_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{expert_schedule, my_bookings};
    use crate::modules::consultations::use_cases::list_bookings::schedule_text::EMPTY_SCHEDULE;
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::{BookSlotRequestBuilder, attendee, expert, test_state};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/consultations/my", get(my_bookings))
            .route("/consultations/expert/schedule", get(expert_schedule))
            .with_state(state)
    }

    fn get_as(uri: &str, telegram_id: i64) -> Request<Body> {
        Request::get(uri)
            .header("x-telegram-id", telegram_id.to_string())
            .body(Body::empty())
            .unwrap()
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_list_the_callers_bookings() {
        let state = test_state();
        state
            .book_slot
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(get_as("/consultations/my", attendee(1).telegram_id))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json.as_array().map(Vec::len), Some(1));
        assert_eq!(json[0]["topic"]["name"], "BI");
        assert_eq!(json[0]["time"], "11:00 - 11:30");
    }

    #[tokio::test]
    async fn it_should_render_the_experts_schedule() {
        let state = test_state();
        let app = app(state.clone());

        let response = app
            .clone()
            .oneshot(get_as("/consultations/expert/schedule", expert(10).telegram_id))
            .await
            .unwrap();
        assert_eq!(json_of(response).await["text"], EMPTY_SCHEDULE);

        state
            .book_slot
            .handle(&attendee(1), BookSlotRequestBuilder::new().build())
            .await
            .unwrap();
        let response = app
            .oneshot(get_as("/consultations/expert/schedule", expert(10).telegram_id))
            .await
            .unwrap();
        let json = json_of(response).await;
        assert_eq!(json["bookings"].as_array().map(Vec::len), Some(1));
        assert!(
            json["text"]
                .as_str()
                .unwrap()
                .contains("Attendee 1 (@attendee1)")
        );
    }

    #[tokio::test]
    async fn it_should_return_403_when_an_attendee_asks_for_a_schedule() {
        let response = app(test_state())
            .oneshot(get_as(
                "/consultations/expert/schedule",
                attendee(1).telegram_id,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
