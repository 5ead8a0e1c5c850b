use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::modules::assessments::core::results::{LeaderboardEntry, QuizResult, QuizSubmission};
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn save(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<QuizSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<QuizResult>), ApiError> {
    let Json(submission) = body?;
    let result = state.quiz_results.save(&caller, submission).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn leaderboard(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    Ok(Json(state.quiz_results.leaderboard().await?))
}

#[cfg(test)]
mod quiz_results_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{leaderboard, save};
    use crate::test_support::fixtures::{attendee, test_state};

    fn app() -> Router {
        Router::new()
            .route("/assessments/quiz-result", post(save))
            .route("/assessments/quiz-leaderboard", get(leaderboard))
            .with_state(test_state())
    }

    fn request(method: &str, uri: &str, attendee_n: i64, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-telegram-id", attendee(attendee_n).telegram_id.to_string())
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_rank_submitted_results() {
        let app = app();
        for (n, correct) in [(1, 4), (2, 7)] {
            let body = format!(
                r#"{{"quiz_date":"2025-09-20","correct_answers":{correct},"total_questions":8,"answers":{{"q1":"a"}}}}"#
            );
            let response = app
                .clone()
                .oneshot(request("POST", "/assessments/quiz-result", n, &body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .oneshot(request("GET", "/assessments/quiz-leaderboard", 1, ""))
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["username"], "attendee2");
        assert_eq!(json[0]["rank"], 1);
        assert_eq!(json[1]["correct_answers"], 4);
    }

    #[tokio::test]
    async fn it_should_return_400_for_impossible_scores() {
        let body = r#"{"quiz_date":"2025-09-20","correct_answers":9,"total_questions":8}"#;
        let response = app()
            .oneshot(request("POST", "/assessments/quiz-result", 1, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
