//! Scoreboard configuration
//!
//! Validation policy for new matches. Loaded from JSON or built in code;
//! any field left out takes its default.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use types::errors::ArgumentError;

/// Default maximum age of a start time: one minute
pub const DEFAULT_MAX_START_AGE_SECS: u64 = 60;

/// Bounds on the start time of a new match, relative to the current clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartTimePolicy {
    /// A start time at or before `now - max_age_secs` is rejected.
    /// `None` disables the check.
    pub max_age_secs: Option<u64>,
    /// A start time after `now + max_future_skew_secs` is rejected.
    /// `None` disables the check.
    pub max_future_skew_secs: Option<u64>,
}

impl Default for StartTimePolicy {
    fn default() -> Self {
        Self {
            max_age_secs: Some(DEFAULT_MAX_START_AGE_SECS),
            max_future_skew_secs: None,
        }
    }
}

impl StartTimePolicy {
    /// Accept any start time
    pub fn unrestricted() -> Self {
        Self {
            max_age_secs: None,
            max_future_skew_secs: None,
        }
    }

    /// Check `started_at` against the clock reading `now`
    pub fn check(&self, started_at: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ArgumentError> {
        if let Some(max_age_secs) = self.max_age_secs {
            let too_old = now
                .checked_sub_signed(secs(max_age_secs))
                .is_some_and(|oldest| started_at <= oldest);
            if too_old {
                return Err(ArgumentError::StartTimeTooOld {
                    started_at,
                    max_age_secs,
                });
            }
        }

        if let Some(max_skew_secs) = self.max_future_skew_secs {
            let too_far = now
                .checked_add_signed(secs(max_skew_secs))
                .is_some_and(|latest| started_at > latest);
            if too_far {
                return Err(ArgumentError::StartTimeInFuture {
                    started_at,
                    max_skew_secs,
                });
            }
        }

        Ok(())
    }
}

// Saturates at chrono's maximum duration.
fn secs(value: u64) -> Duration {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

/// Configuration for a scoreboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub start_time: StartTimePolicy,
}

impl ScoreboardConfig {
    /// Parse a configuration document
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Configuration that accepts any start time
    pub fn permissive() -> Self {
        Self {
            start_time: StartTimePolicy::unrestricted(),
        }
    }
}
