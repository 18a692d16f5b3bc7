//! Scoreboard store
//!
//! Owns the lookup from team name to active match and the ranked book of
//! those matches. Both live in one state struct behind a single lock, so a
//! mutation touches the lookup and the ranking atomically as far as any
//! reader can tell.
//!
//! Each match is registered under both its home and its away team name.
//! A team name therefore resolves to at most one active match, and either
//! participant can be used to update or finish it.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use types::errors::{ArgumentError, ConflictError, MatchError, Result, ScoreboardError};
use types::fixture::Match;
use types::ids::{MatchId, TeamName};

use crate::book::{GoalsThenRecency, RankedBook, RankingPolicy};

/// Lookup and ranking state, always updated together
#[derive(Debug)]
struct BoardState<P: RankingPolicy> {
    /// Active matches by handle
    matches: HashMap<MatchId, Match>,
    /// Team name (home or away) -> handle of its active match
    by_team: HashMap<TeamName, MatchId>,
    /// Handles in ranked order
    book: RankedBook<P>,
}

impl<P: RankingPolicy> BoardState<P> {
    fn lookup(&self, team: &str) -> Option<&Match> {
        self.by_team.get(team).and_then(|id| self.matches.get(id))
    }
}

/// Thread-safe store of active matches
pub struct ScoreboardStore<P: RankingPolicy = GoalsThenRecency> {
    state: RwLock<BoardState<P>>,
}

impl<P: RankingPolicy> ScoreboardStore<P> {
    /// Create an empty store ranking matches with `policy`
    pub fn new(policy: P) -> Self {
        Self {
            state: RwLock::new(BoardState {
                matches: HashMap::new(),
                by_team: HashMap::new(),
                book: RankedBook::new(policy),
            }),
        }
    }

    /// Register a newly started match
    ///
    /// Neither team may already be playing, in any role. Records built
    /// outside `Match::new` are checked again, so a match against itself or
    /// a reused handle is rejected here too.
    pub fn add(&self, m: Match) -> Result<MatchId> {
        if m.home == m.away {
            return Err(ArgumentError::SameTeam {
                team: m.home.to_string(),
            }
            .into());
        }
        if !m.is_in_progress() {
            return Err(MatchError::NotInProgress {
                home: m.home.to_string(),
                away: m.away.to_string(),
            }
            .into());
        }

        let mut state = self.state.write();

        for team in [&m.home, &m.away] {
            if state.by_team.contains_key(team) {
                warn!(team = %team, home = %m.home, away = %m.away, "Team already playing");
                return Err(ConflictError::TeamAlreadyPlaying {
                    team: team.to_string(),
                }
                .into());
            }
        }

        if state.matches.contains_key(&m.id) {
            warn!(match_id = %m.id, "Match handle already on the board");
            return Err(ConflictError::DuplicateHandle {
                match_id: m.id.to_string(),
            }
            .into());
        }

        let inserted = state.book.insert(&m);
        debug_assert!(inserted, "ranked book already holds a fresh handle");

        let id = m.id;
        state.by_team.insert(m.home.clone(), id);
        state.by_team.insert(m.away.clone(), id);
        info!(
            match_id = %id,
            home = %m.home,
            away = %m.away,
            started_at = %m.started_at,
            "Match started"
        );
        state.matches.insert(id, m);

        Ok(id)
    }

    /// Replace the score of the match `team` is playing in
    ///
    /// The match is moved to its new rank in the same step. Returns the
    /// updated match.
    pub fn set_score(&self, team: &str, home_score: u32, away_score: u32) -> Result<Match> {
        let mut guard = self.state.write();
        let state = &mut *guard;

        let Some(id) = state.by_team.get(team).copied() else {
            warn!(team, "Score update for team without an active match");
            return Err(not_found(team));
        };
        let Some(current) = state.matches.get_mut(&id) else {
            return Err(not_found(team));
        };

        let before = current.clone();
        current.set_score(home_score, away_score)?;
        let repositioned = state.book.reposition(&before, current);
        debug_assert!(repositioned, "ranked book lost match {id}");

        debug!(
            match_id = %id,
            home = %current.home,
            away = %current.away,
            old_total = before.total_goals(),
            new_total = current.total_goals(),
            "Score updated"
        );

        Ok(current.clone())
    }

    /// Active match `team` is playing in, as home or away
    pub fn get(&self, team: &str) -> Option<Match> {
        self.state.read().lookup(team).cloned()
    }

    /// Active match by handle
    pub fn get_by_id(&self, id: MatchId) -> Option<Match> {
        self.state.read().matches.get(&id).cloned()
    }

    /// Finish the match `team` is playing in
    ///
    /// Both team names become free again. Returns the finished match.
    pub fn remove(&self, team: &str) -> Result<Match> {
        let mut state = self.state.write();

        let Some(id) = state.by_team.get(team).copied() else {
            warn!(team, "Finish requested for team without an active match");
            return Err(not_found(team));
        };
        let Some(mut m) = state.matches.remove(&id) else {
            return Err(not_found(team));
        };

        let removed = state.book.remove(&m);
        debug_assert!(removed, "ranked book lost match {id}");
        state.by_team.remove(&m.home);
        state.by_team.remove(&m.away);
        m.finish();

        info!(
            match_id = %id,
            home = %m.home,
            away = %m.away,
            home_score = m.home_score,
            away_score = m.away_score,
            "Match finished"
        );

        Ok(m)
    }

    /// Snapshot of all active matches in ranked order
    pub fn summary(&self) -> Vec<Match> {
        let state = self.state.read();
        state
            .book
            .ranked_ids()
            .filter_map(|id| state.matches.get(&id).cloned())
            .collect()
    }

    /// Whether `team` is in an active match
    pub fn is_playing(&self, team: &str) -> bool {
        self.state.read().by_team.contains_key(team)
    }

    /// Number of active matches
    pub fn len(&self) -> usize {
        self.state.read().matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().matches.is_empty()
    }
}

impl<P: RankingPolicy + Default> Default for ScoreboardStore<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

fn not_found(team: &str) -> ScoreboardError {
    ConflictError::MatchNotFound {
        team: team.to_string(),
    }
    .into()
}
