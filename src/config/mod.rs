//! Configuration management for match-standings
//!
//! This module handles configuration loading from defaults, environment
//! variables and TOML files, along with validation.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rating::{RatingConfig, K_FACTOR};
