use crate::modules::assessments::core::errors::AssessmentError;
use crate::modules::assessments::core::results::{QuizResult, TestResult};
use crate::shared::core::primitives::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AssessmentResults: Send + Sync {
    async fn find_test_result(&self, user_id: UserId) -> Result<Option<TestResult>, AssessmentError>;

    /// Stores the result unless the user already has one.
    async fn insert_test_result(&self, result: TestResult) -> Result<(), AssessmentError>;

    /// Flips `gift_received` once; a second call is rejected.
    async fn mark_gift_received(&self, user_id: UserId) -> Result<TestResult, AssessmentError>;

    /// Stores the result unless the user already answered the quiz of that date.
    async fn insert_quiz_result(&self, result: QuizResult) -> Result<(), AssessmentError>;

    /// Best results first: most correct answers, then earliest completion.
    async fn top_quiz_results(&self, limit: usize) -> Result<Vec<QuizResult>, AssessmentError>;
}
