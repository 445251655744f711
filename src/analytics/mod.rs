// src/analytics/mod.rs

//! Reporting engine: filter, aggregate, rank and assemble admin reports.

pub mod aggregate;
pub mod filter;
pub mod leaderboard;
pub mod report;
pub mod terms;

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        account::Role,
        filter::FilterParams,
        report::{AdminUserView, DashboardSummary, ExportBundle},
    },
    store::EventStore,
};

use filter::FilterContext;

/// Entry point for the admin reports.
///
/// Holds no per-request state: each call loads its own snapshot, computes and
/// drops it.
#[derive(Clone)]
pub struct ReportEngine {
    store: Arc<dyn EventStore>,
}

impl ReportEngine {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    /// Rejects non-admin callers before anything is read.
    fn authorize(caller_role: &str) -> Result<(), AppError> {
        match caller_role.parse::<Role>() {
            Ok(role) if role.is_admin() => Ok(()),
            _ => Err(AppError::Forbidden("Not authorized as admin".to_string())),
        }
    }

    fn context(params: &FilterParams) -> Result<FilterContext, AppError> {
        params.validate()?;
        Ok(FilterContext::from_params(params, Utc::now()))
    }

    /// Dashboard statistics.
    pub async fn stats(
        &self,
        caller_role: &str,
        params: &FilterParams,
    ) -> Result<DashboardSummary, AppError> {
        Self::authorize(caller_role)?;
        let ctx = Self::context(params)?;
        tracing::debug!("Computing dashboard stats with {:?}", ctx);

        let snapshot = self.store.load(&ctx.window).await?;
        let summary = report::dashboard(&snapshot, &ctx);

        tracing::info!(
            members = summary.total_members,
            searches = summary.level_stats.values().sum::<u64>(),
            "Dashboard stats computed"
        );
        Ok(summary)
    }

    /// Bulk export tables.
    pub async fn export(
        &self,
        caller_role: &str,
        params: &FilterParams,
    ) -> Result<ExportBundle, AppError> {
        Self::authorize(caller_role)?;
        let ctx = Self::context(params)?;
        tracing::debug!("Building export bundle with {:?}", ctx);

        let snapshot = self.store.load(&ctx.window).await?;
        let bundle = report::export(&snapshot, &ctx);

        tracing::info!(
            users = bundle.users.len(),
            quiz_results = bundle.quiz_results.len(),
            searches = bundle.search_analytics.len(),
            "Export bundle built"
        );
        Ok(bundle)
    }

    /// All accounts with their reviews. Search and quiz history is not loaded.
    pub async fn users(&self, caller_role: &str) -> Result<Vec<AdminUserView>, AppError> {
        Self::authorize(caller_role)?;
        let snapshot = self.store.load_directory().await?;
        Ok(report::user_listing(&snapshot))
    }
}
