//! Error types for the scoreboard
//!
//! Comprehensive error taxonomy using thiserror. Every domain violation is
//! reported as an error value; no operation signals failure with a bare bool.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Top-level scoreboard error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreboardError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),
}

/// Rejected inputs: blank names, identical teams, out-of-range start times
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    #[error("Team name may not be empty")]
    EmptyTeamName,

    #[error("Home and away team must differ: {team}")]
    SameTeam { team: String },

    #[error("Start time {started_at} is {max_age_secs}s or more in the past")]
    StartTimeTooOld {
        started_at: DateTime<Utc>,
        max_age_secs: u64,
    },

    #[error("Start time {started_at} is more than {max_skew_secs}s in the future")]
    StartTimeInFuture {
        started_at: DateTime<Utc>,
        max_skew_secs: u64,
    },
}

/// Operations that clash with the current set of active matches
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConflictError {
    #[error("Team {team} is already playing in an active match")]
    TeamAlreadyPlaying { team: String },

    #[error("No active match for team {team}")]
    MatchNotFound { team: String },

    #[error("Match handle {match_id} is already on the board")]
    DuplicateHandle { match_id: String },
}

/// Match lifecycle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Match {home} vs {away} is no longer in progress")]
    NotInProgress { home: String, away: String },
}

/// Result alias used across the scoreboard
pub type Result<T> = std::result::Result<T, ScoreboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_display() {
        let err = ArgumentError::SameTeam {
            team: "Spain".to_string(),
        };
        assert_eq!(err.to_string(), "Home and away team must differ: Spain");
    }

    #[test]
    fn test_conflict_error_names_team() {
        let err = ConflictError::TeamAlreadyPlaying {
            team: "Brazil".to_string(),
        };
        assert!(err.to_string().contains("Brazil"));
    }

    #[test]
    fn test_scoreboard_error_from_conflict() {
        let conflict = ConflictError::MatchNotFound {
            team: "Italy".to_string(),
        };
        let err: ScoreboardError = conflict.into();
        assert!(matches!(err, ScoreboardError::Conflict(_)));
        assert_eq!(err.to_string(), "Conflict: No active match for team Italy");
    }

    #[test]
    fn test_scoreboard_error_from_argument() {
        let err: ScoreboardError = ArgumentError::EmptyTeamName.into();
        assert!(matches!(
            err,
            ScoreboardError::InvalidArgument(ArgumentError::EmptyTeamName)
        ));
    }
}
