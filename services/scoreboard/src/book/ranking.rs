//! Ranking policies for the summary
//!
//! A policy maps each match to an ordering key. The ranked book orders by
//! that value and falls back to the match handle when keys collide, so a
//! coarse policy never drops matches. Policies that want a fully specified
//! order should still give distinct matches distinct keys.

use std::cmp::{Ordering, Reverse};
use std::fmt;

use chrono::{DateTime, Utc};
use types::fixture::Match;
use types::ids::TeamName;

/// Ordering applied to active matches in the summary
///
/// Smaller keys rank first.
pub trait RankingPolicy: Send + Sync {
    type Key: Ord + Clone + fmt::Debug + Send + Sync;

    /// Ordering key of a match in its current state
    fn rank_key(&self, m: &Match) -> Self::Key;

    /// Compare two matches under this policy
    ///
    /// Identity-equal matches are always `Equal`, even when their scores
    /// differ.
    fn compare(&self, a: &Match, b: &Match) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        self.rank_key(a).cmp(&self.rank_key(b))
    }
}

/// Total goals descending, then most recently started first
///
/// Matches with equal totals and identical start times fall back to home
/// then away team name so the order stays total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalsThenRecency;

pub type GoalsThenRecencyKey = (Reverse<u64>, Reverse<DateTime<Utc>>, TeamName, TeamName);

impl RankingPolicy for GoalsThenRecency {
    type Key = GoalsThenRecencyKey;

    fn rank_key(&self, m: &Match) -> Self::Key {
        (
            Reverse(m.total_goals()),
            Reverse(m.started_at),
            m.home.clone(),
            m.away.clone(),
        )
    }
}
