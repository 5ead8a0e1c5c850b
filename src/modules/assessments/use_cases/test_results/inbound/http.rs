use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::modules::assessments::core::results::{TestResult, TestStatus, TestSubmission};
use crate::modules::directory::use_cases::resolve_caller::inbound::http::Caller;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn status(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<TestStatus>, ApiError> {
    Ok(Json(state.test_results.status(&caller).await?))
}

pub async fn save(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Result<Json<TestSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<TestResult>), ApiError> {
    let Json(submission) = body?;
    let result = state.test_results.save(&caller, submission).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

pub async fn confirm_gift(
    State(state): State<AppState>,
    Caller(caller): Caller,
) -> Result<Json<TestResult>, ApiError> {
    Ok(Json(state.test_results.confirm_gift(&caller).await?))
}

#[cfg(test)]
mod test_results_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{confirm_gift, save, status};
    use crate::test_support::fixtures::{attendee, test_state};

    fn app() -> Router {
        Router::new()
            .route("/assessments/test-status", get(status))
            .route("/assessments/test-result", post(save))
            .route("/assessments/confirm-gift", post(confirm_gift))
            .with_state(test_state())
    }

    fn request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .header("x-telegram-id", attendee(1).telegram_id.to_string())
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const SUBMISSION: &str = r#"{"analyst_type":"INTJ","analyst_name":"Architect","animal":"Owl","tags":["data"],"ei_score":2,"pj_score":4}"#;

    #[tokio::test]
    async fn it_should_save_once_and_confirm_the_gift_once() {
        let app = app();

        let response = app
            .clone()
            .oneshot(request("POST", "/assessments/test-result", SUBMISSION))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(request("POST", "/assessments/test-result", SUBMISSION))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .clone()
            .oneshot(request("GET", "/assessments/test-status", ""))
            .await
            .unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["has_completed"], true);
        assert_eq!(json["test_result"]["animal"], "Owl");

        let response = app
            .clone()
            .oneshot(request("POST", "/assessments/confirm-gift", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(request("POST", "/assessments/confirm-gift", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_404_for_a_gift_without_a_test() {
        let response = app()
            .oneshot(request("POST", "/assessments/confirm-gift", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_on_a_missing_field() {
        let response = app()
            .oneshot(request(
                "POST",
                "/assessments/test-result",
                r#"{"analyst_type":"INTJ"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
