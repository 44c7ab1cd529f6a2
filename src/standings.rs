//! Combined rating and streak updates for a single match

use crate::error::Result;
use crate::rating::{EloRatingCalculator, RatingCalculator};
use crate::streak::calculate_new_streak;
use crate::types::{MatchRatings, MatchResult, RatingChange, Standing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Standings of both competitors after a match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchStandings {
    pub winner: Standing,
    pub loser: Standing,
    pub winner_change: RatingChange,
    pub loser_change: RatingChange,
}

/// Applies match results to competitor standings
#[derive(Clone)]
pub struct StandingsUpdater {
    calculator: Arc<dyn RatingCalculator>,
}

impl std::fmt::Debug for StandingsUpdater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandingsUpdater")
            .field("calculator", &self.calculator.config())
            .finish()
    }
}

impl Default for StandingsUpdater {
    fn default() -> Self {
        Self::new(Arc::new(EloRatingCalculator::default()))
    }
}

impl StandingsUpdater {
    pub fn new(calculator: Arc<dyn RatingCalculator>) -> Self {
        Self { calculator }
    }

    /// Standing handed to a competitor with no match history
    pub fn initial_standing(&self) -> Standing {
        Standing {
            rating: self.calculator.initial_rating(),
            streak: 0,
        }
    }

    /// Record a match where `winner` beat `loser`
    pub fn record_match(&self, winner: Standing, loser: Standing) -> Result<MatchStandings> {
        let new_ratings = self
            .calculator
            .calculate_new_ratings(MatchRatings::new(winner.rating, loser.rating))?;

        let new_winner = Standing {
            rating: new_ratings.winner,
            streak: calculate_new_streak(MatchResult::Win, Some(winner.streak)),
        };
        let new_loser = Standing {
            rating: new_ratings.loser,
            streak: calculate_new_streak(MatchResult::Loss, Some(loser.streak)),
        };

        debug!(
            winner_streak = new_winner.streak,
            loser_streak = new_loser.streak,
            "Recorded match"
        );

        Ok(MatchStandings {
            winner: new_winner,
            loser: new_loser,
            winner_change: RatingChange {
                old_rating: winner.rating,
                new_rating: new_winner.rating,
                result: MatchResult::Win,
            },
            loser_change: RatingChange {
                old_rating: loser.rating,
                new_rating: new_loser.rating,
                result: MatchResult::Loss,
            },
        })
    }
}

/// Record a match using the default Elo calculator
pub fn record_match(winner: Standing, loser: Standing) -> Result<MatchStandings> {
    StandingsUpdater::default().record_match(winner, loser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatingConfig;
    use crate::error::StandingsError;
    use crate::types::RatingPrecision;

    #[test]
    fn test_record_match_fresh_competitors() {
        let result = record_match(Standing::default(), Standing::default()).unwrap();

        assert_eq!(
            result.winner,
            Standing {
                rating: 1520.0,
                streak: 1
            }
        );
        assert_eq!(
            result.loser,
            Standing {
                rating: 1480.0,
                streak: -1
            }
        );
        assert_eq!(result.winner_change.delta(), 20.0);
        assert_eq!(result.loser_change.delta(), -20.0);
        assert_eq!(result.winner_change.result, MatchResult::Win);
        assert_eq!(result.loser_change.result, MatchResult::Loss);
    }

    #[test]
    fn test_record_match_breaks_streaks() {
        let winner = Standing {
            rating: 1400.0,
            streak: -4,
        };
        let loser = Standing {
            rating: 1600.0,
            streak: 7,
        };

        let result = record_match(winner, loser).unwrap();
        assert_eq!(result.winner.streak, 1);
        assert_eq!(result.loser.streak, -1);
        assert_eq!(result.winner.rating, 1430.0);
        assert_eq!(result.loser.rating, 1570.0);
    }

    #[test]
    fn test_record_match_extends_streaks() {
        let winner = Standing {
            rating: 1500.0,
            streak: 2,
        };
        let loser = Standing {
            rating: 1500.0,
            streak: -2,
        };

        let result = record_match(winner, loser).unwrap();
        assert_eq!(result.winner.streak, 3);
        assert_eq!(result.loser.streak, -3);
    }

    #[test]
    fn test_custom_calculator() {
        let calculator = EloRatingCalculator::new(RatingConfig {
            initial_rating: 1000.0,
            precision: RatingPrecision::Fractional,
        })
        .unwrap();
        let updater = StandingsUpdater::new(Arc::new(calculator));

        let fresh = updater.initial_standing();
        assert_eq!(fresh.rating, 1000.0);
        assert_eq!(fresh.streak, 0);

        let strong = Standing {
            rating: 1100.0,
            streak: 0,
        };
        let result = updater.record_match(strong, fresh).unwrap();
        assert!(result.winner.rating.fract() != 0.0);
        assert!((result.winner_change.delta() + result.loser_change.delta()).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_rating_propagates() {
        let winner = Standing {
            rating: f64::INFINITY,
            streak: 0,
        };
        let err = record_match(winner, Standing::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StandingsError>(),
            Some(StandingsError::InvalidRating { .. })
        ));
    }
}
