// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MatchResult, ProfileId};
pub use requests::MatchPayload;
pub use responses::{NextMatch, UpdateMatchResponse};
