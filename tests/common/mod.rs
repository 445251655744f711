// tests/common/mod.rs
#![allow(dead_code)]

use analytics_backend::models::{
    account::{Account, Role},
    quiz_attempt::QuizAttempt,
    review::Review,
    search_event::SearchEvent,
};
use chrono::{DateTime, TimeZone, Utc};

/// Noon UTC on the given day.
pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn account(id: i64, role: Role, username: &str) -> Account {
    Account {
        id,
        username: Some(username.to_string()),
        email: Some(format!("{}@example.com", username)),
        first_name: None,
        role,
        created_at: ts(2025, 1, 1),
        time_spent: 0,
    }
}

pub fn search(id: i64, user_id: i64, query: &str, language: &str) -> SearchEvent {
    SearchEvent {
        id,
        user_id,
        query: query.to_string(),
        level: Some("easy".to_string()),
        language: Some(language.to_string()),
        source: Some("text".to_string()),
        video_watched: false,
        feedback: None,
        created_at: ts(2025, 2, 1),
    }
}

pub fn attempt(
    id: i64,
    user_id: i64,
    score: i64,
    total_questions: i64,
    created_at: DateTime<Utc>,
) -> QuizAttempt {
    QuizAttempt {
        id,
        user_id,
        score,
        total_questions,
        difficulty: Some("medium".to_string()),
        topic: Some("Biology".to_string()),
        time_taken: 60,
        created_at,
    }
}

pub fn review(id: i64, user_id: i64, rating: i32) -> Review {
    Review {
        id,
        user_id,
        rating,
        comment: None,
        created_at: ts(2025, 3, 1),
    }
}
