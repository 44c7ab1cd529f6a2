//! Error types for rating and streak calculations
//!
//! Calculations return `anyhow` results; the specific failure kinds are
//! modelled by [`StandingsError`] and can be recovered with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific calculation failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StandingsError {
    #[error("Invalid {role} rating: {value} is not a finite number")]
    InvalidRating { role: String, value: f64 },

    #[error("Invalid match result code: {code} (expected 1 or -1)")]
    InvalidMatchResult { code: i64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
