use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, ProfileId};

/// Body of `POST {base_url}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPayload {
    #[serde(rename = "otherProfileId")]
    pub other_profile_id: ProfileId,
    pub result: MatchResult,
}

impl MatchPayload {
    pub fn new(other_profile_id: impl Into<ProfileId>, result: MatchResult) -> Self {
        Self {
            other_profile_id: other_profile_id.into(),
            result,
        }
    }
}
