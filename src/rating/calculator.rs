//! Rating calculator trait
//!
//! This module defines the interface for head-to-head rating calculations.

use crate::error::Result;
use crate::types::{MatchRatings, Rating};

/// Trait for calculating rating changes after a two-player match
pub trait RatingCalculator: Send + Sync {
    /// Calculate new ratings for the winner and loser of a match
    ///
    /// # Arguments
    /// * `ratings` - Ratings of both competitors before the match
    ///
    /// # Returns
    /// Ratings of both competitors after the match
    fn calculate_new_ratings(&self, ratings: MatchRatings) -> Result<MatchRatings>;

    /// Get the initial rating for new competitors
    fn initial_rating(&self) -> Rating;

    /// Get current configuration as JSON
    fn config(&self) -> serde_json::Value;
}
