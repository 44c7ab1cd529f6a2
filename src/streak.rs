//! Win/loss streak tracking
//!
//! A streak is a signed counter: positive values count consecutive wins,
//! negative values count consecutive losses. A result against the current
//! direction resets the counter to a fresh streak of one.

use crate::error::Result;
use crate::types::{MatchResult, Streak, DEFAULT_STREAK};
use tracing::trace;

/// Calculate a competitor's streak after a match.
///
/// `existing` defaults to [`DEFAULT_STREAK`] (no streak) when `None`.
/// Extending a streak saturates at the bounds of [`Streak`].
pub fn calculate_new_streak(result: MatchResult, existing: Option<Streak>) -> Streak {
    let existing = existing.unwrap_or(DEFAULT_STREAK);

    let new_streak = match result {
        MatchResult::Win if existing > 0 => existing.saturating_add(1),
        MatchResult::Win => 1,
        MatchResult::Loss if existing < 0 => existing.saturating_sub(1),
        MatchResult::Loss => -1,
    };

    trace!(%result, existing, new_streak, "Calculated streak update");
    new_streak
}

/// Same as [`calculate_new_streak`], taking the result as a wire code
/// (`1` for a win, `-1` for a loss).
pub fn calculate_new_streak_from_code(code: i8, existing: Option<Streak>) -> Result<Streak> {
    let result = MatchResult::try_from(code)?;
    Ok(calculate_new_streak(result, existing))
}
