// src/models/report.rs

use std::collections::BTreeMap;

use serde::Serialize;

/// A merged search term and the number of searches folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub word: String,
    pub count: u64,
}

/// Searches made on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// 'YYYY-MM-DD' (UTC).
    pub date: String,
    pub count: u64,
}

/// One row of the dashboard quiz leaderboard (best attempt per account).
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    pub score: i64,
    pub total_questions: i64,
    /// Rounded to one decimal for display.
    pub percentage: f64,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Everything the admin dashboard renders, computed under one filter set.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_members: u64,
    pub total_reviews: u64,
    pub average_rating: f64,
    pub most_searched_words: Vec<TermCount>,
    pub level_stats: BTreeMap<String, u64>,
    pub source_stats: BTreeMap<String, u64>,
    pub language_stats: BTreeMap<String, u64>,
    pub role_stats: BTreeMap<String, u64>,
    pub daily_searches: Vec<DailyCount>,
    pub total_time_spent: i64,
    pub total_quiz_time: i64,
    pub quiz_participants: u64,
    pub total_videos_watched: u64,
    pub quiz_leaderboard: Vec<LeaderboardEntry>,
}

/// Export table 1: one row per account.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryRow {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub time_spent: i64,
    pub quiz_attempts: u64,
    pub quiz_accuracy: f64,
}

/// Export table 2: accuracy-ranked accounts.
#[derive(Debug, Clone, Serialize)]
pub struct RankedUserRow {
    pub rank: u64,
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub accuracy: f64,
    pub attempts: u64,
    pub total_score: i64,
    pub total_questions: i64,
}

/// Export table 3: one row per quiz attempt.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResultRow {
    pub attempt_id: i64,
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub score: i64,
    pub total_questions: i64,
    pub percentage: f64,
    pub passed: bool,
    pub time_taken: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Export table 4: one row per search event.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRow {
    pub search_id: i64,
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub query: String,
    pub level: Option<String>,
    pub language: Option<String>,
    pub source: Option<String>,
    pub video_watched: bool,
    pub feedback: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Flat tables for bulk export.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle {
    pub users: Vec<UserSummaryRow>,
    pub leaderboard: Vec<RankedUserRow>,
    pub quiz_results: Vec<QuizResultRow>,
    pub search_analytics: Vec<SearchRow>,
}

/// Review attached to an account in the admin user listing.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub rating: i32,
    pub comment: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
}

/// Admin user listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserView {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub reviews: Vec<ReviewView>,
}
