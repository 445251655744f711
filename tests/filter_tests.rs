// tests/filter_tests.rs

mod common;

use std::collections::HashSet;

use analytics_backend::{
    analytics::filter::{FilterContext, Language, TimeWindow},
    models::{account::Role, filter::FilterParams},
};
use chrono::{Duration, TimeZone, Utc};
use common::{account, attempt, search, ts};
use validator::Validate;

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn explicit_dates_cover_whole_days() {
    let now = ts(2025, 6, 15);
    let window = TimeWindow::from_params(Some("7d"), Some("2025-03-01"), Some("2025-03-31"), now);

    assert_eq!(window.start, Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()));
    assert_eq!(window.end, Some(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()));
    assert!(window.contains(Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()));
    assert!(!window.contains(Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap()));
}

#[test]
fn end_date_keeps_sub_second_events_on_the_last_day() {
    let now = ts(2025, 6, 15);
    let window = TimeWindow::from_params(None, None, Some("2025-03-31"), now);

    let last_second = Utc.with_ymd_and_hms(2025, 3, 31, 23, 59, 59).unwrap();
    assert!(window.contains(last_second + Duration::milliseconds(500)));
    assert!(window.contains(last_second + Duration::microseconds(999_999)));
    assert!(!window.contains(last_second + Duration::seconds(1)));
}

#[test]
fn malformed_dates_are_ignored() {
    let now = ts(2025, 6, 15);

    // Both unparseable: timeframe takes over.
    let window = TimeWindow::from_params(Some("7d"), Some("03/01/2025"), Some("yesterday"), now);
    assert_eq!(window.start, Some(now - Duration::days(7)));
    assert_eq!(window.end, None);

    // One good date still counts as an explicit range.
    let window = TimeWindow::from_params(Some("7d"), Some("garbage"), Some("2025-05-01"), now);
    assert_eq!(window.start, None);
    assert_eq!(window.end, Some(Utc.with_ymd_and_hms(2025, 5, 2, 0, 0, 0).unwrap()));
}

#[test]
fn named_timeframes() {
    let now = ts(2025, 6, 15);

    let window = TimeWindow::from_params(Some("30d"), None, None, now);
    assert_eq!(window.start, Some(now - Duration::days(30)));
    assert_eq!(window.end, None);

    assert_eq!(TimeWindow::from_params(Some("all"), None, None, now), TimeWindow::default());
    assert_eq!(TimeWindow::from_params(None, None, None, now), TimeWindow::default());
}

#[test]
fn list_parameters_are_parsed_once_into_sets() {
    let params = FilterParams {
        roles: Some("student, teacher ,Student,,".to_string()),
        languages: Some("English, te ,fr".to_string()),
        topics: Some(" Biology , CHEMISTRY".to_string()),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    assert_eq!(ctx.roles, Some([Role::Student, Role::Teacher].into_iter().collect()));
    assert_eq!(ctx.languages, Some(set(&["en", "english", "te", "telugu", "fr"])));
    assert_eq!(ctx.topics, Some(set(&["biology", "chemistry"])));
}

#[test]
fn blank_lists_mean_no_restriction() {
    let params = FilterParams {
        roles: Some(" , ".to_string()),
        languages: Some(String::new()),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    assert_eq!(ctx.roles, None);
    assert_eq!(ctx.languages, None);
    assert!(ctx.admits_account(&account(1, Role::Engineer, "eve")));
}

#[test]
fn admins_are_never_admitted() {
    let admin = account(1, Role::Admin, "root");
    let params = FilterParams {
        roles: Some("admin".to_string()),
        ..Default::default()
    };

    assert!(!FilterContext::default().admits_account(&admin));
    assert!(!FilterContext::from_params(&params, ts(2025, 6, 15)).admits_account(&admin));
    assert!(!FilterContext::default().admits_search(&search(1, 1, "dna", "en"), Some(&admin)));
}

#[test]
fn orphaned_records_are_dropped() {
    assert!(!FilterContext::default().admits_search(&search(1, 99, "dna", "en"), None));
}

#[test]
fn language_names_and_codes_match_each_other() {
    let owner = account(1, Role::Student, "sam");
    let params = FilterParams {
        languages: Some("english".to_string()),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    assert!(ctx.admits_search(&search(1, 1, "dna", "en"), Some(&owner)));
    assert!(ctx.admits_search(&search(2, 1, "dna", " English "), Some(&owner)));
    assert!(!ctx.admits_search(&search(3, 1, "dna", "te"), Some(&owner)));

    assert_eq!(Language::from_code("HI"), Some(Language::Hindi));
    assert_eq!(Language::from_code("fr"), None);
}

#[test]
fn topics_match_case_insensitively() {
    let owner = account(1, Role::Student, "sam");
    let params = FilterParams {
        topics: Some("biology".to_string()),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    let mut untagged = attempt(2, 1, 5, 10, ts(2025, 2, 1));
    untagged.topic = None;

    assert!(ctx.admits_attempt(&attempt(1, 1, 5, 10, ts(2025, 2, 1)), Some(&owner)));
    assert!(!ctx.admits_attempt(&untagged, Some(&owner)));
}

#[test]
fn full_score_range_keeps_every_scored_attempt() {
    let owner = account(1, Role::Student, "sam");
    let params = FilterParams {
        min_quiz_score: Some(0),
        max_quiz_score: Some(100),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    for (score, total) in [(0, 10), (10, 10), (1, 3), (7, 9)] {
        assert!(ctx.admits_attempt(&attempt(1, 1, score, total, ts(2025, 2, 1)), Some(&owner)));
    }
    assert!(!ctx.admits_attempt(&attempt(2, 1, 0, 0, ts(2025, 2, 1)), Some(&owner)));

    // No range: attempts without questions still count.
    assert!(FilterContext::default().admits_attempt(&attempt(2, 1, 0, 0, ts(2025, 2, 1)), Some(&owner)));
}

#[test]
fn score_bounds_use_full_precision() {
    let owner = account(1, Role::Student, "sam");
    let params = FilterParams {
        max_quiz_score: Some(33),
        ..Default::default()
    };
    let ctx = FilterContext::from_params(&params, ts(2025, 6, 15));

    // 33.33..% is above 33 even though it displays as 33.3.
    assert!(!ctx.admits_attempt(&attempt(1, 1, 1, 3, ts(2025, 2, 1)), Some(&owner)));
    assert!(ctx.admits_attempt(&attempt(2, 1, 33, 100, ts(2025, 2, 1)), Some(&owner)));
}

#[test]
fn score_bounds_outside_percent_range_fail_validation() {
    let params = FilterParams {
        min_quiz_score: Some(-1),
        max_quiz_score: Some(101),
        ..Default::default()
    };

    assert!(params.validate().is_err());
    assert!(FilterParams::default().validate().is_ok());
}
