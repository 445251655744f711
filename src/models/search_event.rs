// src/models/search_event.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'search_history' table in the database.
/// One row per lookup made by an account.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SearchEvent {
    pub id: i64,
    pub user_id: i64,

    /// Raw query text as typed by the user.
    pub query: String,

    /// Difficulty level: 'easy', 'medium', 'hard' or NULL when unset.
    pub level: Option<String>,

    /// ISO code ('en') or English language name ('English'); both occur.
    pub language: Option<String>,

    /// Input channel: 'text', 'image' or 'voice'.
    pub source: Option<String>,

    pub video_watched: bool,
    pub feedback: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
