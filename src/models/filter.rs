// src/models/filter.rs

use serde::Deserialize;
use validator::Validate;

/// Query parameters shared by the dashboard and export endpoints.
///
/// Everything arrives as loosely-typed strings; `FilterContext::from_params`
/// turns it into the typed constraint set used by the reports.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FilterParams {
    /// '7d', '30d' or 'all'. Ignored when an explicit date parses.
    pub timeframe: Option<String>,

    /// Inclusive calendar date, 'YYYY-MM-DD'. Unparseable values are ignored.
    pub start_date: Option<String>,

    /// Inclusive calendar date, 'YYYY-MM-DD'. Unparseable values are ignored.
    pub end_date: Option<String>,

    /// Comma-separated role names, e.g. 'student,teacher'.
    pub roles: Option<String>,

    /// Comma-separated language names or codes, e.g. 'english,te'.
    pub languages: Option<String>,

    /// Comma-separated quiz topics.
    pub topics: Option<String>,

    #[validate(range(min = 0, max = 100, message = "min_quiz_score must be between 0 and 100"))]
    pub min_quiz_score: Option<i64>,

    #[validate(range(min = 0, max = 100, message = "max_quiz_score must be between 0 and 100"))]
    pub max_quiz_score: Option<i64>,
}
