// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{EventStore, Snapshot};
use crate::{
    analytics::filter::TimeWindow,
    error::AppError,
    models::{account::Account, quiz_attempt::QuizAttempt, review::Review, search_event::SearchEvent},
};

/// `EventStore` backed by the application's Postgres database.
#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>, AppError> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, username, email, first_name, role, created_at, time_spent
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load accounts: {:?}", e);
            AppError::from(e)
        })
    }

    async fn fetch_reviews(&self, window: &TimeWindow) -> Result<Vec<Review>, AppError> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, user_id, rating, comment, created_at
            FROM app_reviews
            WHERE ($1::TIMESTAMPTZ IS NULL OR created_at >= $1)
              AND ($2::TIMESTAMPTZ IS NULL OR created_at < $2)
            ORDER BY id
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load app reviews: {:?}", e);
            AppError::from(e)
        })
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn load(&self, window: &TimeWindow) -> Result<Snapshot, AppError> {
        let accounts = self.fetch_accounts().await?;

        // The time window is pushed down; NULL bounds disable the predicate.
        let searches = sqlx::query_as::<_, SearchEvent>(
            r#"
            SELECT id, user_id, query, level, language, source, video_watched, feedback, created_at
            FROM search_history
            WHERE ($1::TIMESTAMPTZ IS NULL OR created_at >= $1)
              AND ($2::TIMESTAMPTZ IS NULL OR created_at < $2)
            ORDER BY id
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load search history: {:?}", e);
            AppError::from(e)
        })?;

        let attempts = sqlx::query_as::<_, QuizAttempt>(
            r#"
            SELECT id, user_id, score, total_questions, difficulty, topic, time_taken, created_at
            FROM quiz_results
            WHERE ($1::TIMESTAMPTZ IS NULL OR created_at >= $1)
              AND ($2::TIMESTAMPTZ IS NULL OR created_at < $2)
            ORDER BY id
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load quiz results: {:?}", e);
            AppError::from(e)
        })?;

        let reviews = self.fetch_reviews(window).await?;

        tracing::debug!(
            accounts = accounts.len(),
            searches = searches.len(),
            attempts = attempts.len(),
            reviews = reviews.len(),
            "Loaded event snapshot"
        );

        Ok(Snapshot {
            accounts,
            searches,
            attempts,
            reviews,
        })
    }
    async fn load_directory(&self) -> Result<Snapshot, AppError> {
        let accounts = self.fetch_accounts().await?;
        let reviews = self.fetch_reviews(&TimeWindow::default()).await?;

        tracing::debug!(
            accounts = accounts.len(),
            reviews = reviews.len(),
            "Loaded account directory"
        );

        Ok(Snapshot {
            accounts,
            reviews,
            ..Snapshot::default()
        })
    }
}
