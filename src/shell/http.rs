use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::assessments::use_cases::quiz_results::inbound::http as quiz_http;
use crate::modules::assessments::use_cases::test_results::inbound::http as test_http;
use crate::modules::consultations::use_cases::book_slot::inbound::http as book_http;
use crate::modules::consultations::use_cases::cancel_booking::inbound::http as cancel_http;
use crate::modules::consultations::use_cases::list_bookings::inbound::http as bookings_http;
use crate::modules::consultations::use_cases::list_candidate_slots::inbound::http as candidates_http;
use crate::modules::consultations::use_cases::list_topics::inbound::http as topics_http;
use crate::modules::directory::use_cases::resolve_caller::inbound::http as caller_http;
use crate::modules::workshops::use_cases::registrations::inbound::http as workshops_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let schema: AppSchema = graphql::schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/users/verify", post(caller_http::verify))
        .route("/consultations/topics", get(topics_http::handle))
        .route("/consultations/slots", get(candidates_http::handle))
        .route("/consultations/book", post(book_http::handle))
        .route("/consultations/cancel/{slot_id}", post(cancel_http::handle))
        .route("/consultations/my", get(bookings_http::my_bookings))
        .route(
            "/consultations/expert/schedule",
            get(bookings_http::expert_schedule),
        )
        .route("/workshops", get(workshops_http::list))
        .route("/workshops/my", get(workshops_http::my))
        .route("/workshops/register/{workshop_id}", post(workshops_http::register))
        .route("/workshops/cancel/{workshop_id}", post(workshops_http::cancel))
        .route("/assessments/test-status", get(test_http::status))
        .route("/assessments/test-result", post(test_http::save))
        .route("/assessments/confirm-gift", post(test_http::confirm_gift))
        .route("/assessments/quiz-result", post(quiz_http::save))
        .route("/assessments/quiz-leaderboard", get(quiz_http::leaderboard))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
