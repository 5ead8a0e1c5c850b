use crate::modules::assessments::core::errors::AssessmentError;
use crate::shared::core::primitives::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Personality test outcome submitted by the mini-app.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TestSubmission {
    pub analyst_type: String,
    pub analyst_name: String,
    pub animal: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub ei_score: i32,
    pub pj_score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub user_id: UserId,
    pub analyst_type: String,
    pub analyst_name: String,
    pub animal: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ei_score: i32,
    pub pj_score: i32,
    pub gift_received: bool,
    pub completed_at: DateTime<Utc>,
}

impl TestResult {
    pub fn new(user_id: UserId, submission: TestSubmission, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            analyst_type: submission.analyst_type,
            analyst_name: submission.analyst_name,
            animal: submission.animal,
            description: submission.description,
            tags: submission.tags,
            ei_score: submission.ei_score,
            pj_score: submission.pj_score,
            gift_received: false,
            completed_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestStatus {
    pub has_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_result: Option<TestResult>,
}

impl From<Option<TestResult>> for TestStatus {
    fn from(result: Option<TestResult>) -> Self {
        Self {
            has_completed: result.is_some(),
            test_result: result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizSubmission {
    pub quiz_date: NaiveDate,
    pub correct_answers: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub answers: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub user_id: UserId,
    pub quiz_date: NaiveDate,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub answers: serde_json::Value,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Rejects an empty quiz and more correct answers than questions.
    pub fn new(
        user_id: UserId,
        submission: QuizSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, AssessmentError> {
        if submission.total_questions == 0 {
            return Err(AssessmentError::Validation(
                "total_questions must be positive".into(),
            ));
        }
        if submission.correct_answers > submission.total_questions {
            return Err(AssessmentError::Validation(
                "correct_answers cannot exceed total_questions".into(),
            ));
        }
        Ok(Self {
            user_id,
            quiz_date: submission.quiz_date,
            correct_answers: submission.correct_answers,
            total_questions: submission.total_questions,
            answers: submission.answers,
            completed_at: now,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub username: Option<String>,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub completed_at: DateTime<Utc>,
}
