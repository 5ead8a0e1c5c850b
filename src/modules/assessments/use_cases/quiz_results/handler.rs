use crate::modules::assessments::adapters::outbound::results::AssessmentResults;
use crate::modules::assessments::core::errors::AssessmentError;
use crate::modules::assessments::core::results::{LeaderboardEntry, QuizResult, QuizSubmission};
use crate::modules::directory::adapters::outbound::directory::Directory;
use crate::modules::directory::core::user::User;
use chrono::Utc;
use std::sync::Arc;

pub const LEADERBOARD_SIZE: usize = 10;

pub struct QuizResultsHandler<TResults, TDirectory>
where
    TResults: AssessmentResults + 'static,
    TDirectory: Directory + 'static,
{
    results: Arc<TResults>,
    directory: Arc<TDirectory>,
}

impl<TResults, TDirectory> QuizResultsHandler<TResults, TDirectory>
where
    TResults: AssessmentResults + 'static,
    TDirectory: Directory + 'static,
{
    pub fn new(results: Arc<TResults>, directory: Arc<TDirectory>) -> Self {
        Self { results, directory }
    }

    pub async fn save(
        &self,
        caller: &User,
        submission: QuizSubmission,
    ) -> Result<QuizResult, AssessmentError> {
        let result = QuizResult::new(caller.id, submission, Utc::now())?;
        self.results.insert_quiz_result(result.clone()).await?;
        tracing::info!(
            user_id = %caller.id,
            quiz_date = %result.quiz_date,
            correct = result.correct_answers,
            total = result.total_questions,
            "quiz result saved"
        );
        Ok(result)
    }

    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, AssessmentError> {
        let top = self.results.top_quiz_results(LEADERBOARD_SIZE).await?;
        let mut entries = Vec::with_capacity(top.len());
        for (index, result) in top.into_iter().enumerate() {
            let user = self.directory.find_user(result.user_id).await?;
            entries.push(LeaderboardEntry {
                rank: index + 1,
                name: user.as_ref().map(User::full_name).unwrap_or_default(),
                username: user.and_then(|u| u.username),
                correct_answers: result.correct_answers,
                total_questions: result.total_questions,
                completed_at: result.completed_at,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod quiz_results_handler_tests {
    use super::*;
    use crate::modules::assessments::adapters::outbound::results_in_memory::InMemoryAssessmentResults;
    use crate::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
    use crate::test_support::fixtures::{attendee, event_day};
    use rstest::{fixture, rstest};

    type Handler = QuizResultsHandler<InMemoryAssessmentResults, InMemoryDirectory>;

    #[fixture]
    fn handler() -> Handler {
        let directory =
            InMemoryDirectory::with_records((1..=12).map(attendee).collect(), Vec::new());
        QuizResultsHandler::new(
            Arc::new(InMemoryAssessmentResults::new()),
            Arc::new(directory),
        )
    }

    fn submission(correct_answers: u32) -> QuizSubmission {
        QuizSubmission {
            quiz_date: event_day(),
            correct_answers,
            total_questions: 12,
            answers: serde_json::json!([]),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_invalid_scores(handler: Handler) {
        let result = handler.save(&attendee(1), submission(13)).await;
        assert!(matches!(result, Err(AssessmentError::Validation(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_the_ten_best_with_display_data(handler: Handler) {
        for n in 1..=12 {
            handler.save(&attendee(n), submission(n as u32)).await.unwrap();
        }

        let board = handler.leaderboard().await.unwrap();
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[0].correct_answers, 12);
        assert_eq!(board[0].name, "Attendee 12");
        assert_eq!(board[0].username.as_deref(), Some("attendee12"));
        assert_eq!(board[9].correct_answers, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_second_quiz_on_the_same_day(handler: Handler) {
        handler.save(&attendee(1), submission(4)).await.unwrap();
        assert_eq!(
            handler.save(&attendee(1), submission(5)).await.err(),
            Some(AssessmentError::AlreadyCompleted)
        );
    }
}
