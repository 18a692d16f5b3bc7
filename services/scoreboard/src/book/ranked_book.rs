//! Ranked book of active matches
//!
//! Keeps match handles sorted by the ranking policy's key. Uses BTreeSet so
//! iteration order is deterministic and always reflects the stored keys.
//!
//! Entries are keyed by (rank key, handle). A policy whose keys collide for
//! distinct matches still keeps every match in the book; colliding matches
//! are ordered by handle, i.e. by creation order.
//!
//! The key of a match depends on its score, so a match must be repositioned
//! whenever its score changes. Mutating a match without repositioning it
//! leaves a stale key behind.

use std::collections::BTreeSet;

use types::fixture::Match;
use types::ids::MatchId;

use super::ranking::RankingPolicy;

/// Ordered collection of active matches
#[derive(Debug, Clone)]
pub struct RankedBook<P: RankingPolicy> {
    policy: P,
    /// (rank key, handle), smallest first
    entries: BTreeSet<(P::Key, MatchId)>,
}

impl<P: RankingPolicy> RankedBook<P> {
    /// Create a new empty book ordered by `policy`
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            entries: BTreeSet::new(),
        }
    }

    /// Insert a match at its rank
    ///
    /// Returns false if this match is already present at that rank.
    pub fn insert(&mut self, m: &Match) -> bool {
        self.entries.insert((self.policy.rank_key(m), m.id))
    }

    /// Remove a match from the book
    ///
    /// `m` must carry the same score it had when inserted. Returns true if
    /// the match was found and removed.
    pub fn remove(&mut self, m: &Match) -> bool {
        self.entries.remove(&(self.policy.rank_key(m), m.id))
    }

    /// Move a match from the rank of `before` to the rank of `after`
    ///
    /// Both must describe the same match. Returns false, leaving the book
    /// untouched, if `before` is not present.
    pub fn reposition(&mut self, before: &Match, after: &Match) -> bool {
        debug_assert_eq!(before.id, after.id);
        if !self.remove(before) {
            return false;
        }
        self.entries.insert((self.policy.rank_key(after), after.id))
    }

    /// Handles in ranked order, best first
    pub fn ranked_ids(&self) -> impl Iterator<Item = MatchId> + '_ {
        self.entries.iter().map(|(_, id)| *id)
    }

    /// Check if the book is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the number of ranked matches
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<P: RankingPolicy + Default> Default for RankedBook<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
