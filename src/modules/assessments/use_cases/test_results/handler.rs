use crate::modules::assessments::adapters::outbound::results::AssessmentResults;
use crate::modules::assessments::core::errors::AssessmentError;
use crate::modules::assessments::core::results::{TestResult, TestStatus, TestSubmission};
use crate::modules::directory::core::user::User;
use chrono::Utc;
use std::sync::Arc;

pub struct TestResultsHandler<TResults>
where
    TResults: AssessmentResults + 'static,
{
    results: Arc<TResults>,
}

impl<TResults> TestResultsHandler<TResults>
where
    TResults: AssessmentResults + 'static,
{
    pub fn new(results: Arc<TResults>) -> Self {
        Self { results }
    }

    pub async fn status(&self, caller: &User) -> Result<TestStatus, AssessmentError> {
        Ok(self.results.find_test_result(caller.id).await?.into())
    }

    pub async fn save(
        &self,
        caller: &User,
        submission: TestSubmission,
    ) -> Result<TestResult, AssessmentError> {
        let result = TestResult::new(caller.id, submission, Utc::now());
        self.results.insert_test_result(result.clone()).await?;
        tracing::info!(user_id = %caller.id, analyst_type = %result.analyst_type, "test result saved");
        Ok(result)
    }

    pub async fn confirm_gift(&self, caller: &User) -> Result<TestResult, AssessmentError> {
        let result = self.results.mark_gift_received(caller.id).await?;
        tracing::info!(user_id = %caller.id, "gift handed out");
        Ok(result)
    }
}
