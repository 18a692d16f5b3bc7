//! Ranked book infrastructure module
//!
//! Contains the ranking policy and the ordered container of active matches.

pub mod ranking;
pub mod ranked_book;

pub use ranking::{GoalsThenRecency, RankingPolicy};
pub use ranked_book::RankedBook;
