//! Common types shared by the rating and streak calculations

use crate::error::StandingsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A competitor's relative skill estimate
pub type Rating = f64;

/// Signed run length: positive for consecutive wins, negative for
/// consecutive losses, zero for no streak
pub type Streak = i32;

/// Baseline rating handed to new competitors
pub const DEFAULT_RATING: Rating = 1500.0;

/// Streak assumed when a competitor has no recorded streak
pub const DEFAULT_STREAK: Streak = 0;

/// Outcome of a match from one competitor's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    /// Wire code for this result: `1` for a win, `-1` for a loss
    pub fn code(self) -> i8 {
        match self {
            MatchResult::Win => 1,
            MatchResult::Loss => -1,
        }
    }

    /// The same match seen from the opponent's side
    pub fn opposite(self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchResult::Win => write!(f, "win"),
            MatchResult::Loss => write!(f, "loss"),
        }
    }
}

impl TryFrom<i8> for MatchResult {
    type Error = StandingsError;

    fn try_from(code: i8) -> std::result::Result<Self, Self::Error> {
        match code {
            1 => Ok(MatchResult::Win),
            -1 => Ok(MatchResult::Loss),
            other => Err(StandingsError::InvalidMatchResult {
                code: i64::from(other),
            }),
        }
    }
}

impl FromStr for MatchResult {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "w" => Ok(MatchResult::Win),
            "loss" | "l" => Ok(MatchResult::Loss),
            other => {
                let code: i64 = other
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Unknown match result: {}", s))?;
                let code = i8::try_from(code)
                    .map_err(|_| StandingsError::InvalidMatchResult { code })?;
                Ok(MatchResult::try_from(code)?)
            }
        }
    }
}

/// Ratings of the two competitors in a match, keyed by who won
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRatings {
    pub winner: Rating,
    pub loser: Rating,
}

impl MatchRatings {
    pub fn new(winner: Rating, loser: Rating) -> Self {
        Self { winner, loser }
    }
}

/// How computed ratings are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPrecision {
    /// Round to the nearest whole point, halves rounding up
    #[default]
    Integer,
    /// Keep the full floating point result
    Fractional,
}

impl RatingPrecision {
    /// Apply this precision rule to a raw rating
    pub fn apply(self, rating: Rating) -> Rating {
        match self {
            RatingPrecision::Integer => (rating + 0.5).floor(),
            RatingPrecision::Fractional => rating,
        }
    }
}

impl FromStr for RatingPrecision {
    type Err = StandingsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "integer" => Ok(RatingPrecision::Integer),
            "fractional" => Ok(RatingPrecision::Fractional),
            other => Err(StandingsError::ConfigurationError {
                message: format!("Unknown rating precision: {}", other),
            }),
        }
    }
}

/// A competitor's rating and streak between matches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub rating: Rating,
    pub streak: Streak,
}

impl Default for Standing {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            streak: DEFAULT_STREAK,
        }
    }
}

/// Rating change information for one competitor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub old_rating: Rating,
    pub new_rating: Rating,
    pub result: MatchResult,
}

impl RatingChange {
    /// Signed rating movement caused by the match
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
