// src/analytics/report.rs

use std::collections::BTreeMap;

use super::{
    aggregate,
    filter::{FilterContext, FilteredEvents},
    leaderboard::{self, display_name},
    terms,
};
use crate::{
    config::{LEADERBOARD_LIMIT, QUIZ_PASS_PERCENTAGE},
    models::report::{
        AdminUserView, DashboardSummary, ExportBundle, QuizResultRow, ReviewView, SearchRow,
        UserSummaryRow,
    },
    store::Snapshot,
};

fn owner_role(events: &FilteredEvents<'_>, user_id: i64) -> String {
    events
        .owner(user_id)
        .map(|account| account.role.as_str().to_string())
        .unwrap_or_default()
}

/// Dashboard statistics for one filter set.
pub fn dashboard(snapshot: &Snapshot, ctx: &FilterContext) -> DashboardSummary {
    let events = ctx.apply(snapshot);

    DashboardSummary {
        total_members: aggregate::member_count(&events),
        total_reviews: aggregate::review_count(&events),
        average_rating: aggregate::average_rating(&events),
        most_searched_words: terms::most_searched(events.searches.iter().map(|e| e.query.as_str())),
        level_stats: aggregate::level_stats(&events),
        source_stats: aggregate::source_stats(&events),
        language_stats: aggregate::language_stats(&events),
        role_stats: aggregate::role_stats(&events),
        daily_searches: aggregate::daily_searches(&events),
        total_time_spent: aggregate::total_time_spent(&events),
        total_quiz_time: aggregate::total_quiz_time(&events),
        quiz_participants: aggregate::quiz_participants(&events),
        total_videos_watched: aggregate::videos_watched(&events),
        quiz_leaderboard: leaderboard::top_performers(&events, LEADERBOARD_LIMIT),
    }
}

/// The four flat export tables for one filter set.
pub fn export(snapshot: &Snapshot, ctx: &FilterContext) -> ExportBundle {
    let events = ctx.apply(snapshot);
    let totals = leaderboard::quiz_totals(&events);

    let users = events
        .accounts
        .iter()
        .map(|account| {
            let quiz = totals.get(&account.id).copied().unwrap_or_default();
            UserSummaryRow {
                user_id: account.id,
                username: account.display_name(),
                email: account.email.clone(),
                role: account.role.as_str().to_string(),
                created_at: account.created_at,
                time_spent: account.time_spent,
                quiz_attempts: quiz.attempts,
                quiz_accuracy: aggregate::round1(quiz.accuracy()),
            }
        })
        .collect();

    let mut attempts = events.attempts.clone();
    attempts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    let quiz_results = attempts
        .into_iter()
        .map(|attempt| {
            let percentage = attempt.percentage();
            QuizResultRow {
                attempt_id: attempt.id,
                user_id: attempt.user_id,
                username: display_name(&events, attempt.user_id),
                role: owner_role(&events, attempt.user_id),
                topic: attempt.topic.clone(),
                difficulty: attempt.difficulty.clone(),
                score: attempt.score,
                total_questions: attempt.total_questions,
                percentage: aggregate::round1(percentage),
                passed: attempt.total_questions > 0 && percentage >= QUIZ_PASS_PERCENTAGE,
                time_taken: attempt.time_taken,
                created_at: attempt.created_at,
            }
        })
        .collect();

    let mut searches = events.searches.clone();
    searches.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    let search_analytics = searches
        .into_iter()
        .map(|event| SearchRow {
            search_id: event.id,
            user_id: event.user_id,
            username: display_name(&events, event.user_id),
            role: owner_role(&events, event.user_id),
            query: event.query.clone(),
            level: event.level.clone(),
            language: event.language.clone(),
            source: event.source.clone(),
            video_watched: event.video_watched,
            feedback: event.feedback,
            created_at: event.created_at,
        })
        .collect();

    ExportBundle {
        users,
        leaderboard: leaderboard::accuracy_ranking(&events),
        quiz_results,
        search_analytics,
    }
}

/// Every account with its review, for the administrative user list.
/// Admins are listed too; this is not a learner statistic.
pub fn user_listing(snapshot: &Snapshot) -> Vec<AdminUserView> {
    let mut reviews: BTreeMap<i64, Vec<ReviewView>> = BTreeMap::new();
    for review in &snapshot.reviews {
        reviews.entry(review.user_id).or_default().push(ReviewView {
            rating: review.rating,
            comment: review.comment.clone(),
            date: review.created_at,
        });
    }

    let mut accounts: Vec<_> = snapshot.accounts.iter().collect();
    accounts.sort_by_key(|account| account.id);

    accounts
        .into_iter()
        .map(|account| AdminUserView {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            role: account.role.as_str().to_string(),
            created_at: account.created_at,
            reviews: reviews.remove(&account.id).unwrap_or_default(),
        })
        .collect()
}
