// src/models/review.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Represents the 'app_reviews' table in the database.
/// At most one row per account; resubmission updates it in place.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub user_id: i64,

    /// 1 to 5 stars.
    pub rating: i32,

    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
