// In memory implementation of the AssessmentResults port.

use crate::modules::assessments::adapters::outbound::results::AssessmentResults;
use crate::modules::assessments::core::errors::AssessmentError;
use crate::modules::assessments::core::results::{QuizResult, TestResult};
use crate::shared::core::primitives::UserId;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryAssessmentResults {
    tests: RwLock<HashMap<UserId, TestResult>>,
    quizzes: RwLock<Vec<QuizResult>>,
    is_offline: bool,
}

impl InMemoryAssessmentResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), AssessmentError> {
        if self.is_offline {
            return Err(AssessmentError::Backend("Result store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl AssessmentResults for InMemoryAssessmentResults {
    async fn find_test_result(&self, user_id: UserId) -> Result<Option<TestResult>, AssessmentError> {
        self.ensure_online()?;
        Ok(self.tests.read().await.get(&user_id).cloned())
    }

    async fn insert_test_result(&self, result: TestResult) -> Result<(), AssessmentError> {
        self.ensure_online()?;
        let mut tests = self.tests.write().await;
        if tests.contains_key(&result.user_id) {
            return Err(AssessmentError::AlreadyCompleted);
        }
        tests.insert(result.user_id, result);
        Ok(())
    }

    async fn mark_gift_received(&self, user_id: UserId) -> Result<TestResult, AssessmentError> {
        self.ensure_online()?;
        let mut tests = self.tests.write().await;
        let result = tests.get_mut(&user_id).ok_or(AssessmentError::NotFound)?;
        if result.gift_received {
            return Err(AssessmentError::GiftAlreadyReceived);
        }
        result.gift_received = true;
        Ok(result.clone())
    }

    async fn insert_quiz_result(&self, result: QuizResult) -> Result<(), AssessmentError> {
        self.ensure_online()?;
        let mut quizzes = self.quizzes.write().await;
        if quizzes
            .iter()
            .any(|q| q.user_id == result.user_id && q.quiz_date == result.quiz_date)
        {
            return Err(AssessmentError::AlreadyCompleted);
        }
        quizzes.push(result);
        Ok(())
    }

    async fn top_quiz_results(&self, limit: usize) -> Result<Vec<QuizResult>, AssessmentError> {
        self.ensure_online()?;
        let mut results = self.quizzes.read().await.clone();
        results.sort_by_key(|q| (Reverse(q.correct_answers), q.completed_at, q.user_id));
        results.truncate(limit);
        Ok(results)
    }
}

#[cfg(test)]
mod in_memory_assessment_results_tests {
    use super::*;
    use crate::modules::assessments::core::results::{QuizSubmission, TestSubmission};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryAssessmentResults {
        InMemoryAssessmentResults::new()
    }

    fn test_result(user_id: i64) -> TestResult {
        TestResult::new(
            UserId(user_id),
            TestSubmission {
                analyst_type: "ENTJ".into(),
                analyst_name: "Strategist".into(),
                animal: "Owl".into(),
                description: String::new(),
                tags: vec!["data".into()],
                ei_score: 3,
                pj_score: -1,
            },
            Utc::now(),
        )
    }

    fn quiz_result(user_id: i64, correct: u32, minutes: i64) -> QuizResult {
        let completed_at = Utc.with_ymd_and_hms(2025, 9, 20, 9, 0, 0).unwrap()
            + Duration::minutes(minutes);
        QuizResult::new(
            UserId(user_id),
            QuizSubmission {
                quiz_date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
                correct_answers: correct,
                total_questions: 10,
                answers: serde_json::Value::Null,
            },
            completed_at,
        )
        .unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_store_one_test_result_per_user(store: InMemoryAssessmentResults) {
        store.insert_test_result(test_result(1)).await.unwrap();
        assert_eq!(
            store.insert_test_result(test_result(1)).await,
            Err(AssessmentError::AlreadyCompleted)
        );
        assert!(store.find_test_result(UserId(1)).await.unwrap().is_some());
        assert!(store.find_test_result(UserId(2)).await.unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_confirm_the_gift_once(store: InMemoryAssessmentResults) {
        assert_eq!(
            store.mark_gift_received(UserId(1)).await,
            Err(AssessmentError::NotFound)
        );
        store.insert_test_result(test_result(1)).await.unwrap();
        assert!(store.mark_gift_received(UserId(1)).await.unwrap().gift_received);
        assert_eq!(
            store.mark_gift_received(UserId(1)).await,
            Err(AssessmentError::GiftAlreadyReceived)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_one_quiz_per_user_and_date(store: InMemoryAssessmentResults) {
        store.insert_quiz_result(quiz_result(1, 5, 0)).await.unwrap();
        assert_eq!(
            store.insert_quiz_result(quiz_result(1, 9, 5)).await,
            Err(AssessmentError::AlreadyCompleted)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_rank_by_score_then_completion_time(store: InMemoryAssessmentResults) {
        store.insert_quiz_result(quiz_result(1, 7, 10)).await.unwrap();
        store.insert_quiz_result(quiz_result(2, 9, 20)).await.unwrap();
        store.insert_quiz_result(quiz_result(3, 7, 5)).await.unwrap();

        let top: Vec<UserId> = store
            .top_quiz_results(2)
            .await
            .unwrap()
            .into_iter()
            .map(|q| q.user_id)
            .collect();
        assert_eq!(top, vec![UserId(2), UserId(3)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_store_is_offline(mut store: InMemoryAssessmentResults) {
        store.toggle_offline();
        assert!(matches!(
            store.find_test_result(UserId(1)).await,
            Err(AssessmentError::Backend(_))
        ));
    }
}
