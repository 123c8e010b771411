use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::models::domain::MatchResult;

/// Candidate returned by `GET {base_url}`.
///
/// Fields the server adds beyond the known ones are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextMatch {
    pub name: String,
    #[serde(default)]
    pub pictures: Vec<String>,
    #[serde(default)]
    pub link_to_profile: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Acknowledgement returned by `POST {base_url}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMatchResponse {
    pub message: String,
    pub result: MatchResult,
}
