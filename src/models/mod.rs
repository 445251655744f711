// src/models/mod.rs

pub mod account;
pub mod filter;
pub mod quiz_attempt;
pub mod report;
pub mod review;
pub mod search_event;
