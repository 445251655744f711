// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of normalized search terms considered for fuzzy merging.
pub const TERM_CANDIDATE_LIMIT: usize = 50;

/// Two terms are merged when their similarity ratio exceeds this value.
pub const TERM_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Number of merged terms reported as `most_searched_words`.
pub const TOP_TERMS_LIMIT: usize = 5;

/// Number of distinct accounts on the dashboard quiz leaderboard.
pub const LEADERBOARD_LIMIT: usize = 10;

/// Number of distinct calendar days in the daily search series.
pub const DAILY_SERIES_DAYS: usize = 30;

/// Attempts at or above this percentage are flagged as passed in exports.
pub const QUIZ_PASS_PERCENTAGE: f64 = 50.0;

/// Display name used when an account has neither username nor first name.
pub const ANONYMOUS_NAME: &str = "Anonymous";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub rust_log: String,
    pub bind_addr: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            jwt_secret,
            rust_log,
            bind_addr,
            log_dir,
        }
    }
}
