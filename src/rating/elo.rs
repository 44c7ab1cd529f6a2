//! Elo rating system implementation
//!
//! Standard logistic Elo with the fixed [`K_FACTOR`]. Expected scores use a
//! 400-point scale, so a 400-point gap means 10:1 odds.

use crate::config::rating::{RatingConfig, K_FACTOR};
use crate::error::{Result, StandingsError};
use crate::rating::calculator::RatingCalculator;
use crate::types::{MatchRatings, Rating};
use tracing::{debug, warn};

/// Probability that a competitor rated `rating` beats one rated `opponent`
pub fn expected_score(rating: Rating, opponent: Rating) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) / 400.0))
}

/// Calculate new ratings after `ratings.winner` beat `ratings.loser`,
/// rounding to whole points.
pub fn calculate_new_elo(ratings: MatchRatings) -> Result<MatchRatings> {
    EloRatingCalculator::default().calculate_new_ratings(ratings)
}

fn ensure_finite(role: &str, value: Rating) -> Result<()> {
    if !value.is_finite() {
        warn!("Rejecting non-finite {} rating: {}", role, value);
        return Err(StandingsError::InvalidRating {
            role: role.to_string(),
            value,
        }
        .into());
    }
    Ok(())
}

/// Elo rating calculator implementation
#[derive(Debug, Clone, Default)]
pub struct EloRatingCalculator {
    config: RatingConfig,
}

impl EloRatingCalculator {
    /// Create a new Elo rating calculator
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn rating_config(&self) -> &RatingConfig {
        &self.config
    }
}

impl RatingCalculator for EloRatingCalculator {
    fn calculate_new_ratings(&self, ratings: MatchRatings) -> Result<MatchRatings> {
        ensure_finite("winner", ratings.winner)?;
        ensure_finite("loser", ratings.loser)?;

        let expected_winner = expected_score(ratings.winner, ratings.loser);
        let expected_loser = expected_score(ratings.loser, ratings.winner);

        let precision = self.config.precision;
        let new_ratings = MatchRatings {
            winner: precision.apply(ratings.winner + K_FACTOR * (1.0 - expected_winner)),
            loser: precision.apply(ratings.loser + K_FACTOR * (0.0 - expected_loser)),
        };

        debug!(
            winner = ratings.winner,
            loser = ratings.loser,
            new_winner = new_ratings.winner,
            new_loser = new_ratings.loser,
            "Calculated Elo update"
        );

        Ok(new_ratings)
    }

    fn initial_rating(&self) -> Rating {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "elo",
            "k_factor": K_FACTOR,
            "initial_rating": self.config.initial_rating,
            "precision": self.config.precision,
        })
    }
}
