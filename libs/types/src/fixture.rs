//! Match record and its lifecycle
//!
//! A match is created in progress with a 0-0 score. Only the scores change
//! while it is in progress; finishing it is terminal.
//!
//! Identity is the triple (start time, home team, away team). Two records
//! with the same triple are the same match no matter what their scores or
//! handles say, which keeps ranked containers consistent across score
//! updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::errors::{ArgumentError, MatchError};
use crate::ids::{MatchId, TeamName};

/// Match status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    /// Being played; score may change
    InProgress,
    /// Removed from the board (terminal)
    Finished,
}

/// A match between a home and an away team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home: TeamName,
    pub away: TeamName,
    pub started_at: DateTime<Utc>,
    pub home_score: u32,
    pub away_score: u32,
    pub status: MatchStatus,
}

impl Match {
    /// Create a new in-progress match with a 0-0 score
    pub fn new(
        started_at: DateTime<Utc>,
        home: TeamName,
        away: TeamName,
    ) -> Result<Self, ArgumentError> {
        if home == away {
            return Err(ArgumentError::SameTeam {
                team: home.to_string(),
            });
        }

        Ok(Self {
            id: MatchId::new(),
            home,
            away,
            started_at,
            home_score: 0,
            away_score: 0,
            status: MatchStatus::InProgress,
        })
    }

    /// Set both scores at once
    ///
    /// Fails once the match has finished.
    pub fn set_score(&mut self, home_score: u32, away_score: u32) -> Result<(), MatchError> {
        if !self.is_in_progress() {
            return Err(MatchError::NotInProgress {
                home: self.home.to_string(),
                away: self.away.to_string(),
            });
        }
        self.home_score = home_score;
        self.away_score = away_score;
        Ok(())
    }

    /// Mark the match as finished
    pub fn finish(&mut self) {
        self.status = MatchStatus::Finished;
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }

    /// Goals scored by both sides
    pub fn total_goals(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Whether the team plays in this match, in either role
    pub fn involves(&self, team: &str) -> bool {
        self.home.as_str() == team || self.away.as_str() == team
    }

    pub fn view(&self) -> MatchView {
        MatchView::from(self)
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.started_at == other.started_at && self.home == other.home && self.away == other.away
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.started_at.hash(state);
        self.home.hash(state);
        self.away.hash(state);
    }
}

/// Read-only projection of a match for summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub id: MatchId,
    pub home: String,
    pub away: String,
    pub home_score: u32,
    pub away_score: u32,
    pub started_at: DateTime<Utc>,
}

impl From<&Match> for MatchView {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id,
            home: m.home.to_string(),
            away: m.away.to_string(),
            home_score: m.home_score,
            away_score: m.away_score,
            started_at: m.started_at,
        }
    }
}

impl fmt::Display for MatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home, self.home_score, self.away, self.away_score
        )
    }
}
