//! Live Scoreboard Service
//!
//! Tracks ongoing matches and their scores, and produces a summary ranked
//! by total goals with the most recently started match winning ties.
//!
//! **Key Invariants:**
//! - A team plays in at most one active match, as home or away
//! - The summary always reflects the current score of every active match
//! - Lookup and ranking change together under one lock
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use scoreboard::{Scoreboard, ScoreboardConfig};
//!
//! let board = Scoreboard::new(ScoreboardConfig::default());
//! board.start_match(Utc::now(), "Mexico", "Canada").unwrap();
//! board.update_score("Mexico", 0, 5).unwrap();
//!
//! let summary = board.summary();
//! assert_eq!(summary[0].to_string(), "Mexico 0 - Canada 5");
//! ```

pub mod book;
pub mod board;
pub mod config;
pub mod store;

pub use board::Scoreboard;
pub use book::{GoalsThenRecency, RankingPolicy};
pub use config::{ScoreboardConfig, StartTimePolicy};
pub use store::ScoreboardStore;
