// Service exports
pub mod match_client;

pub use match_client::{ClientConfig, MatchClient, MatchClientError};
