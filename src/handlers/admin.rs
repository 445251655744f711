// src/handlers/admin.rs

use axum::{
    Json,
    extract::{Extension, Query, State},
    response::IntoResponse,
};

use crate::{
    analytics::ReportEngine, error::AppError, models::filter::FilterParams, utils::jwt::Claims,
};

/// Dashboard statistics under the requested filters.
/// Admin only.
pub async fn get_stats(
    State(engine): State<ReportEngine>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let summary = engine.stats(&claims.role, &params).await?;
    Ok(Json(summary))
}

/// Flat export tables (users, leaderboard, quiz results, search analytics).
/// Admin only.
pub async fn export_data(
    State(engine): State<ReportEngine>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<FilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let bundle = engine.export(&claims.role, &params).await?;
    Ok(Json(bundle))
}

/// Lists all accounts with their app reviews.
/// Admin only.
pub async fn list_users(
    State(engine): State<ReportEngine>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let users = engine.users(&claims.role).await?;
    Ok(Json(users))
}
