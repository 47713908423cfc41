//! aconews - a news proxy backend
//!
//! This crate provides a thin HTTP proxy in front of a third-party news API
//! together with the pure query logic a paginated news browser needs:
//! category validation, windowed pagination ranges, and an explicit
//! query-state machine with stale-response guarding.

pub mod category;
pub mod client;
pub mod config;
pub mod pagination;
pub mod routes;
pub mod state;
