// src/models/quiz_attempt.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'quiz_results' table in the database.
/// Attempts are immutable once recorded.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: i64,
    pub user_id: i64,
    pub score: i64,
    pub total_questions: i64,
    pub difficulty: Option<String>,
    pub topic: Option<String>,

    /// Seconds spent on the attempt.
    pub time_taken: i64,

    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl QuizAttempt {
    /// Full-precision percentage, 0.0 when the attempt has no questions.
    pub fn percentage(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total_questions as f64
    }
}
