// src/analytics/aggregate.rs

//! Grouped counts and scalar totals over a [`FilteredEvents`] view.
//!
//! Every function here reads the same filtered records; none of them
//! filters on its own.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use super::filter::{FilteredEvents, Language};
use crate::{config::DAILY_SERIES_DAYS, models::report::DailyCount};

/// Bucket for empty or missing level/source values.
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Rounds to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole * 100`, or 0.0 when `whole` is zero.
pub fn percent(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / whole as f64
}

pub fn member_count(events: &FilteredEvents<'_>) -> u64 {
    events.accounts.len() as u64
}

pub fn review_count(events: &FilteredEvents<'_>) -> u64 {
    events.reviews.len() as u64
}

/// Mean rating rounded to one decimal, 0.0 without reviews.
pub fn average_rating(events: &FilteredEvents<'_>) -> f64 {
    if events.reviews.is_empty() {
        return 0.0;
    }
    let sum: i64 = events.reviews.iter().map(|r| i64::from(r.rating)).sum();
    round1(sum as f64 / events.reviews.len() as f64)
}

fn bucket(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_lowercase(),
        _ => UNKNOWN_BUCKET.to_string(),
    }
}

fn count_by<I>(keys: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Searches per difficulty level.
pub fn level_stats(events: &FilteredEvents<'_>) -> BTreeMap<String, u64> {
    count_by(events.searches.iter().map(|e| bucket(e.level.as_deref())))
}

/// Searches per input channel.
pub fn source_stats(events: &FilteredEvents<'_>) -> BTreeMap<String, u64> {
    count_by(events.searches.iter().map(|e| bucket(e.source.as_deref())))
}

/// Searches per reported language. Codes outside the language table are left out.
pub fn language_stats(events: &FilteredEvents<'_>) -> BTreeMap<String, u64> {
    count_by(events.searches.iter().filter_map(|e| {
        e.language
            .as_deref()
            .and_then(Language::from_code)
            .map(|language| language.label().to_string())
    }))
}

/// Members per role. Only roles with at least one member appear.
pub fn role_stats(events: &FilteredEvents<'_>) -> BTreeMap<String, u64> {
    count_by(events.accounts.iter().map(|a| a.role.as_str().to_string()))
}

/// Searches per UTC day for the latest [`DAILY_SERIES_DAYS`] days that have
/// activity, oldest first.
pub fn daily_searches(events: &FilteredEvents<'_>) -> Vec<DailyCount> {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in &events.searches {
        *per_day.entry(event.created_at.date_naive()).or_insert(0) += 1;
    }

    let skip = per_day.len().saturating_sub(DAILY_SERIES_DAYS);
    per_day
        .into_iter()
        .skip(skip)
        .map(|(day, count)| DailyCount {
            date: day.format("%Y-%m-%d").to_string(),
            count,
        })
        .collect()
}

/// Seconds spent in the app by the filtered accounts.
pub fn total_time_spent(events: &FilteredEvents<'_>) -> i64 {
    events.accounts.iter().map(|a| a.time_spent).sum()
}

/// Seconds spent on the filtered quiz attempts.
pub fn total_quiz_time(events: &FilteredEvents<'_>) -> i64 {
    events.attempts.iter().map(|a| a.time_taken).sum()
}

/// Distinct accounts with at least one filtered attempt.
pub fn quiz_participants(events: &FilteredEvents<'_>) -> u64 {
    events
        .attempts
        .iter()
        .map(|a| a.user_id)
        .collect::<HashSet<_>>()
        .len() as u64
}

pub fn videos_watched(events: &FilteredEvents<'_>) -> u64 {
    events.searches.iter().filter(|e| e.video_watched).count() as u64
}
