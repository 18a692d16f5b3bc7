//! Identifier types for scoreboard entities
//!
//! Match handles use UUID v7 so that handles sort in creation order.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

use crate::errors::ArgumentError;

/// Handle for a match on the scoreboard
///
/// Assigned once when the match is created and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Create a new MatchId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create from existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a team taking part in a match
///
/// Surrounding whitespace is trimmed on construction and the remaining
/// name must not be empty. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamName(String);

impl TeamName {
    /// Create a team name, rejecting blank input
    pub fn try_new(name: impl AsRef<str>) -> Result<Self, ArgumentError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ArgumentError::EmptyTeamName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TeamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by TeamName be queried with a plain &str.
impl Borrow<str> for TeamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamName {
    type Error = ArgumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for TeamName {
    type Error = ArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<TeamName> for String {
    fn from(name: TeamName) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_id_creation() {
        let id1 = MatchId::new();
        let id2 = MatchId::new();
        assert_ne!(id1, id2, "MatchIds should be unique");
    }

    #[test]
    fn test_match_id_serialization() {
        let id = MatchId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: MatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_team_name_trims_whitespace() {
        let name = TeamName::try_new("  Argentina ").unwrap();
        assert_eq!(name.as_str(), "Argentina");
        assert_eq!(name.to_string(), "Argentina");
    }

    #[test]
    fn test_team_name_rejects_blank() {
        assert_eq!(TeamName::try_new(""), Err(ArgumentError::EmptyTeamName));
        assert_eq!(TeamName::try_new("   \t"), Err(ArgumentError::EmptyTeamName));
    }

    #[test]
    fn test_team_name_is_case_sensitive() {
        let upper = TeamName::try_new("Spain").unwrap();
        let lower = TeamName::try_new("spain").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_team_name_serialization() {
        let name = TeamName::try_new("Uruguay").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Uruguay\"");

        let deserialized: TeamName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, deserialized);

        assert!(serde_json::from_str::<TeamName>("\"  \"").is_err());
    }
}
