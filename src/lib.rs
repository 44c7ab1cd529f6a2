//! Match Standings - Elo ratings and win/loss streaks
//!
//! This crate computes updated Elo ratings and streak counters after a
//! head-to-head match between two competitors. All calculations are pure;
//! storing the results is left to the caller.

pub mod config;
pub mod error;
pub mod rating;
pub mod standings;
pub mod streak;
pub mod types;

// Re-export commonly used types and functions
pub use error::{Result, StandingsError};
pub use types::*;

pub use config::K_FACTOR;
pub use rating::{calculate_new_elo, expected_score, EloRatingCalculator, RatingCalculator};
pub use standings::{record_match, MatchStandings, StandingsUpdater};
pub use streak::{calculate_new_streak, calculate_new_streak_from_code};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
