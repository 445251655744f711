// src/analytics/filter.rs

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::{
    models::{
        account::{Account, Role},
        filter::FilterParams,
        quiz_attempt::QuizAttempt,
        review::Review,
        search_event::SearchEvent,
    },
    store::Snapshot,
};

/// Half-open `[start, end)` bound on record timestamps. `None` means open.
///
/// An explicit `end_date` is stored as midnight of the following day, so the
/// whole end date is covered at any timestamp precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Builds the window from request parameters.
    ///
    /// Explicit dates win over `timeframe`. A date that does not parse as
    /// `YYYY-MM-DD` is treated as if it was never sent, so a request with only
    /// garbage dates falls back to `timeframe`.
    pub fn from_params(
        timeframe: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> Self {
        let start = start_date
            .and_then(parse_date)
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());
        let end = end_date
            .and_then(parse_date)
            .and_then(|day| day.succ_opt())
            .and_then(|next_day| next_day.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc());

        if start.is_some() || end.is_some() {
            return Self { start, end };
        }

        let start = match timeframe.map(str::trim) {
            Some("7d") => Some(now - Duration::days(7)),
            Some("30d") => Some(now - Duration::days(30)),
            _ => None,
        };

        Self { start, end: None }
    }

    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| ts >= start) && self.end.is_none_or(|end| ts < end)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Languages reported on the dashboard.
///
/// Stored records carry either an ISO code or the English name, so this table
/// is the single place where the two spellings are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Telugu,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Telugu, Language::Hindi];

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Telugu => "Telugu",
            Language::Hindi => "Hindi",
        }
    }

    /// Raw values that stored records may carry for this language.
    pub fn codes(&self) -> &'static [&'static str] {
        match self {
            Language::English => &["en", "english"],
            Language::Telugu => &["te", "telugu"],
            Language::Hindi => &["hi", "hindi"],
        }
    }

    /// Case-insensitive lookup of a stored value.
    pub fn from_code(raw: &str) -> Option<Self> {
        let code = raw.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|language| language.codes().contains(&code.as_str()))
    }
}

/// Splits a comma-separated parameter into trimmed, non-empty tokens.
/// Returns `None` when nothing usable was sent.
fn split_list(raw: Option<&str>) -> Option<Vec<&str>> {
    let tokens: Vec<&str> = raw?
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() { None } else { Some(tokens) }
}

/// Typed, validated constraints for one report computation.
///
/// Built once from `FilterParams` and then applied through [`FilterContext::apply`],
/// so every aggregation in a report reads the same filtered records.
#[derive(Debug, Clone, Default)]
pub struct FilterContext {
    pub window: TimeWindow,

    /// `None` means every learner role. May be empty when only unknown roles were sent.
    pub roles: Option<HashSet<Role>>,

    /// Lower-cased raw codes after synonym expansion.
    pub languages: Option<HashSet<String>>,

    /// Lower-cased topics.
    pub topics: Option<HashSet<String>>,

    pub min_score: Option<i64>,
    pub max_score: Option<i64>,
}

impl FilterContext {
    pub fn from_params(params: &FilterParams, now: DateTime<Utc>) -> Self {
        let window = TimeWindow::from_params(
            params.timeframe.as_deref(),
            params.start_date.as_deref(),
            params.end_date.as_deref(),
            now,
        );

        let roles = split_list(params.roles.as_deref()).map(|tokens| {
            tokens
                .into_iter()
                .filter_map(|token| token.parse::<Role>().ok())
                .collect()
        });

        let languages = split_list(params.languages.as_deref()).map(|tokens| {
            tokens
                .into_iter()
                .flat_map(|token| match Language::from_code(token) {
                    Some(language) => language.codes().iter().map(|c| c.to_string()).collect(),
                    None => vec![token.to_lowercase()],
                })
                .collect()
        });

        let topics = split_list(params.topics.as_deref())
            .map(|tokens| tokens.into_iter().map(str::to_lowercase).collect());

        Self {
            window,
            roles,
            languages,
            topics,
            min_score: params.min_quiz_score,
            max_score: params.max_quiz_score,
        }
    }

    /// Admins never count; otherwise the role filter decides.
    /// Records whose owner cannot be resolved are not attributable and are dropped.
    fn admits_owner(&self, owner: Option<&Account>) -> bool {
        match owner {
            Some(account) => {
                account.is_learner()
                    && self
                        .roles
                        .as_ref()
                        .is_none_or(|roles| roles.contains(&account.role))
            }
            None => false,
        }
    }

    pub fn admits_account(&self, account: &Account) -> bool {
        self.admits_owner(Some(account)) && self.window.contains(account.created_at)
    }

    pub fn admits_search(&self, event: &SearchEvent, owner: Option<&Account>) -> bool {
        if !self.admits_owner(owner) || !self.window.contains(event.created_at) {
            return false;
        }

        match &self.languages {
            None => true,
            Some(codes) => event
                .language
                .as_deref()
                .is_some_and(|language| codes.contains(&language.trim().to_lowercase())),
        }
    }

    pub fn admits_attempt(&self, attempt: &QuizAttempt, owner: Option<&Account>) -> bool {
        if !self.admits_owner(owner) || !self.window.contains(attempt.created_at) {
            return false;
        }

        let topic_ok = match &self.topics {
            None => true,
            Some(topics) => attempt
                .topic
                .as_deref()
                .is_some_and(|topic| topics.contains(&topic.trim().to_lowercase())),
        };

        topic_ok && self.admits_score(attempt)
    }

    /// Score bounds compare against the full-precision percentage.
    /// An active range never admits attempts without questions.
    fn admits_score(&self, attempt: &QuizAttempt) -> bool {
        if self.min_score.is_none() && self.max_score.is_none() {
            return true;
        }
        if attempt.total_questions == 0 {
            return false;
        }

        let percentage = attempt.percentage();
        self.min_score.is_none_or(|min| percentage >= min as f64)
            && self.max_score.is_none_or(|max| percentage <= max as f64)
    }

    pub fn admits_review(&self, review: &Review, owner: Option<&Account>) -> bool {
        self.admits_owner(owner) && self.window.contains(review.created_at)
    }

    /// Applies every constraint to a snapshot in one pass.
    pub fn apply<'a>(&self, snapshot: &'a Snapshot) -> FilteredEvents<'a> {
        let directory: HashMap<i64, &'a Account> = snapshot
            .accounts
            .iter()
            .map(|account| (account.id, account))
            .collect();
        let owner = |user_id: i64| directory.get(&user_id).copied();

        let accounts = snapshot
            .accounts
            .iter()
            .filter(|account| self.admits_account(account))
            .collect();

        let searches = snapshot
            .searches
            .iter()
            .filter(|event| self.admits_search(event, owner(event.user_id)))
            .collect();

        let attempts = snapshot
            .attempts
            .iter()
            .filter(|attempt| self.admits_attempt(attempt, owner(attempt.user_id)))
            .collect();

        let reviews = snapshot
            .reviews
            .iter()
            .filter(|review| self.admits_review(review, owner(review.user_id)))
            .collect();

        FilteredEvents {
            accounts,
            searches,
            attempts,
            reviews,
            directory,
        }
    }
}

/// Records that survived a [`FilterContext`], borrowed from the snapshot.
#[derive(Debug)]
pub struct FilteredEvents<'a> {
    pub accounts: Vec<&'a Account>,
    pub searches: Vec<&'a SearchEvent>,
    pub attempts: Vec<&'a QuizAttempt>,
    pub reviews: Vec<&'a Review>,
    directory: HashMap<i64, &'a Account>,
}

impl<'a> FilteredEvents<'a> {
    /// Looks up any account in the snapshot, filtered or not.
    pub fn owner(&self, user_id: i64) -> Option<&'a Account> {
        self.directory.get(&user_id).copied()
    }
}
