// src/analytics/leaderboard.rs

use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashSet},
};

use super::{
    aggregate::{percent, round1},
    filter::FilteredEvents,
};
use crate::{
    config::ANONYMOUS_NAME,
    models::{
        quiz_attempt::QuizAttempt,
        report::{LeaderboardEntry, RankedUserRow},
    },
};

/// Compares `a_num / a_den` with `b_num / b_den` without floating point.
/// Both denominators must be positive.
fn cmp_ratio(a_num: i64, a_den: i64, b_num: i64, b_den: i64) -> Ordering {
    (i128::from(a_num) * i128::from(b_den)).cmp(&(i128::from(b_num) * i128::from(a_den)))
}

/// Best attempt first: percentage, then question count, then recency.
/// The attempt id settles anything left so the order is total.
pub fn compare_attempts(a: &QuizAttempt, b: &QuizAttempt) -> Ordering {
    cmp_ratio(b.score, b.total_questions, a.score, a.total_questions)
        .then_with(|| b.total_questions.cmp(&a.total_questions))
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| a.id.cmp(&b.id))
}

/// Filtered attempts that can be ranked (at least one question), best first.
pub fn ranked_attempts<'a>(events: &FilteredEvents<'a>) -> Vec<&'a QuizAttempt> {
    let mut eligible: Vec<&QuizAttempt> = events
        .attempts
        .iter()
        .copied()
        .filter(|attempt| attempt.total_questions > 0)
        .collect();
    eligible.sort_by(|a, b| compare_attempts(a, b));
    eligible
}

/// Top quiz performers, one entry per account holding its best attempt.
pub fn top_performers(events: &FilteredEvents<'_>, limit: usize) -> Vec<LeaderboardEntry> {
    let mut seen = HashSet::new();
    let mut board = Vec::with_capacity(limit);

    for attempt in ranked_attempts(events) {
        if board.len() == limit {
            break;
        }
        if !seen.insert(attempt.user_id) {
            continue;
        }

        board.push(LeaderboardEntry {
            user_id: attempt.user_id,
            username: display_name(events, attempt.user_id),
            score: attempt.score,
            total_questions: attempt.total_questions,
            percentage: round1(attempt.percentage()),
            topic: attempt.topic.clone(),
            difficulty: attempt.difficulty.clone(),
            created_at: attempt.created_at,
        });
    }

    board
}

pub(crate) fn display_name(events: &FilteredEvents<'_>, user_id: i64) -> String {
    events
        .owner(user_id)
        .map(|account| account.display_name())
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
}

/// Per-account quiz totals over the filtered attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizTotals {
    pub attempts: u64,
    pub total_score: i64,
    pub total_questions: i64,
}

impl QuizTotals {
    /// Σscore / Σquestions as a percentage, 0.0 without questions.
    pub fn accuracy(&self) -> f64 {
        percent(self.total_score, self.total_questions)
    }
}

pub fn quiz_totals(events: &FilteredEvents<'_>) -> BTreeMap<i64, QuizTotals> {
    let mut totals: BTreeMap<i64, QuizTotals> = BTreeMap::new();
    for attempt in &events.attempts {
        let entry = totals.entry(attempt.user_id).or_default();
        entry.attempts += 1;
        entry.total_score += attempt.score;
        entry.total_questions += attempt.total_questions;
    }
    totals
}

/// Accounts ranked by lifetime accuracy, then attempt count, numbered from 1.
/// Accounts that never answered a question are not ranked.
pub fn accuracy_ranking(events: &FilteredEvents<'_>) -> Vec<RankedUserRow> {
    let mut ranked: Vec<(i64, QuizTotals)> = quiz_totals(events)
        .into_iter()
        .filter(|(_, totals)| totals.total_questions > 0)
        .collect();

    ranked.sort_by(|(a_id, a), (b_id, b)| {
        cmp_ratio(b.total_score, b.total_questions, a.total_score, a.total_questions)
            .then_with(|| b.attempts.cmp(&a.attempts))
            .then_with(|| a_id.cmp(b_id))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(position, (user_id, totals))| RankedUserRow {
            rank: position as u64 + 1,
            user_id,
            username: display_name(events, user_id),
            role: events
                .owner(user_id)
                .map(|account| account.role.as_str().to_string())
                .unwrap_or_default(),
            accuracy: round1(totals.accuracy()),
            attempts: totals.attempts,
            total_score: totals.total_score,
            total_questions: totals.total_questions,
        })
        .collect()
}
