//! Scoreboard facade
//!
//! Validates raw inputs, builds match records and drives the store. This is
//! the surface hosts talk to: start, update, finish, summarize.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use types::errors::{ArgumentError, Result};
use types::fixture::{Match, MatchView};
use types::ids::{MatchId, TeamName};

use crate::book::{GoalsThenRecency, RankingPolicy};
use crate::config::ScoreboardConfig;
use crate::store::ScoreboardStore;

/// Live scoreboard of ongoing matches
pub struct Scoreboard<P: RankingPolicy = GoalsThenRecency> {
    config: ScoreboardConfig,
    store: ScoreboardStore<P>,
}

impl Scoreboard<GoalsThenRecency> {
    /// Create a scoreboard with the default ranking
    pub fn new(config: ScoreboardConfig) -> Self {
        Self::with_policy(config, GoalsThenRecency)
    }
}

impl<P: RankingPolicy> Scoreboard<P> {
    /// Create a scoreboard ranking matches with `policy`
    pub fn with_policy(config: ScoreboardConfig, policy: P) -> Self {
        info!(
            max_age_secs = ?config.start_time.max_age_secs,
            max_future_skew_secs = ?config.start_time.max_future_skew_secs,
            "Scoreboard initialized"
        );

        Self {
            config,
            store: ScoreboardStore::new(policy),
        }
    }

    /// Start a match, checking `started_at` against the current UTC clock
    ///
    /// Returns the handle of the new match.
    pub fn start_match(&self, started_at: DateTime<Utc>, home: &str, away: &str) -> Result<MatchId> {
        self.start_match_with_clock(Utc::now(), started_at, home, away)
    }

    /// Start a match, checking `started_at` against the clock reading `now`
    pub fn start_match_with_clock(
        &self,
        now: DateTime<Utc>,
        started_at: DateTime<Utc>,
        home: &str,
        away: &str,
    ) -> Result<MatchId> {
        let m = self.build_match(now, started_at, home, away).map_err(|err| {
            warn!(home, away, error = %err, "Rejected new match");
            err
        })?;
        self.store.add(m)
    }

    fn build_match(
        &self,
        now: DateTime<Utc>,
        started_at: DateTime<Utc>,
        home: &str,
        away: &str,
    ) -> std::result::Result<Match, ArgumentError> {
        let home = TeamName::try_new(home)?;
        let away = TeamName::try_new(away)?;
        let m = Match::new(started_at, home, away)?;
        self.config.start_time.check(started_at, now)?;
        Ok(m)
    }

    /// Set the score of the match `team` plays in, as home or away
    pub fn update_score(&self, team: &str, home_score: u32, away_score: u32) -> Result<MatchView> {
        self.store
            .set_score(team, home_score, away_score)
            .map(|m| m.view())
    }

    /// Finish the match `team` plays in and take it off the board
    pub fn finish_match(&self, team: &str) -> Result<MatchView> {
        self.store.remove(team).map(|m| m.view())
    }

    /// Ranked snapshot of all active matches
    pub fn summary(&self) -> Vec<MatchView> {
        self.store.summary().iter().map(MatchView::from).collect()
    }

    /// Active match `team` plays in
    pub fn get(&self, team: &str) -> Option<MatchView> {
        self.store.get(team).map(|m| m.view())
    }

    pub fn active_matches(&self) -> usize {
        self.store.len()
    }

    pub fn config(&self) -> &ScoreboardConfig {
        &self.config
    }

    pub fn store(&self) -> &ScoreboardStore<P> {
        &self.store
    }
}

impl Default for Scoreboard<GoalsThenRecency> {
    fn default() -> Self {
        Self::new(ScoreboardConfig::default())
    }
}
