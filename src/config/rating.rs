//! Rating system configuration

use crate::error::{Result, StandingsError};
use crate::types::{Rating, RatingPrecision, DEFAULT_RATING};
use serde::{Deserialize, Serialize};

/// Elo K-factor: the largest swing a single match can cause.
///
/// Changing this value makes every previously stored rating incomparable
/// with new ones, so the whole rating history must be recomputed after a
/// change. It is deliberately not part of [`RatingConfig`].
pub const K_FACTOR: f64 = 40.0;

/// Runtime rating settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub initial_rating: Rating,
    pub precision: RatingPrecision,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: DEFAULT_RATING,
            precision: RatingPrecision::Integer,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !self.initial_rating.is_finite() {
            return Err(StandingsError::ConfigurationError {
                message: format!(
                    "Initial rating must be finite, got {}",
                    self.initial_rating
                ),
            }
            .into());
        }

        Ok(())
    }
}
