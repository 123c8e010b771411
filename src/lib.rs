//! Match Client - HTTP client for the match API
//!
//! This library wraps the two match endpoints: fetching the next match
//! candidate (`GET /match`) and reporting the outcome of a match
//! (`POST /match`).

pub mod config;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use crate::config::{ClientSettings, Settings};
pub use models::{MatchPayload, MatchResult, NextMatch, ProfileId, UpdateMatchResponse};
pub use services::{ClientConfig, MatchClient, MatchClientError};
