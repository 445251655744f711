// src/store/mod.rs

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::{
    analytics::filter::TimeWindow,
    error::AppError,
    models::{account::Account, quiz_attempt::QuizAttempt, review::Review, search_event::SearchEvent},
};

pub use memory::MemoryStore;
pub use postgres::PgEventStore;

/// Read-only copy of the four record collections for one report.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub searches: Vec<SearchEvent>,
    pub attempts: Vec<QuizAttempt>,
    pub reviews: Vec<Review>,
}

/// Source of raw records for the reporting engine.
///
/// Implementations may use `window` to narrow the event collections, but must
/// always return every account: reports resolve owners and display names
/// through the full account list. The engine re-applies the window itself, so
/// returning extra events is harmless.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn load(&self, window: &TimeWindow) -> Result<Snapshot, AppError>;

    /// Every account and every review, with no time bound. The search and
    /// quiz collections of the returned snapshot are left empty.
    async fn load_directory(&self) -> Result<Snapshot, AppError>;
}
