//! Types library for the live scoreboard
//!
//! Shared definitions used by the scoreboard service: identifiers, team
//! names, the match record with its score lifecycle, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Match handles (MatchId) and validated team names (TeamName)
//! - `fixture`: The match record and its read-only view
//! - `errors`: Error taxonomy

pub mod ids;
pub mod fixture;
pub mod errors;

