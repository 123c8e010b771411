use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::MatchClientError;

/// Outcome of a match interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Success,
    Denial,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Success => "success",
            MatchResult::Denial => "denial",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchResult {
    type Err = MatchClientError;

    /// Exact, case-sensitive match against the two wire values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(MatchResult::Success),
            "denial" => Ok(MatchResult::Denial),
            other => Err(MatchClientError::InvalidArgument(other.to_string())),
        }
    }
}

impl TryFrom<&str> for MatchResult {
    type Error = MatchClientError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Opaque identifier of the other profile in a match.
///
/// Serialized untagged, so the server receives exactly the JSON number or
/// string the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{}", n),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        ProfileId::Text(value)
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        ProfileId::Text(value.to_string())
    }
}

impl From<i64> for ProfileId {
    fn from(value: i64) -> Self {
        ProfileId::Number(value.into())
    }
}

impl From<u64> for ProfileId {
    fn from(value: u64) -> Self {
        ProfileId::Number(value.into())
    }
}

impl From<i32> for ProfileId {
    fn from(value: i32) -> Self {
        ProfileId::Number(value.into())
    }
}
