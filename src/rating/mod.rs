//! Two-player Elo rating updates
//!
//! This module provides the rating calculator interface and the Elo
//! implementation with a fixed K-factor.

pub mod calculator;
pub mod elo;

// Re-export commonly used types
pub use calculator::RatingCalculator;
pub use elo::{calculate_new_elo, expected_score, EloRatingCalculator};
