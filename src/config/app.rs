//! Main application configuration
//!
//! This module defines the top-level configuration for the match-standings
//! command line tool, including environment variable and TOML file loading.

use crate::config::rating::RatingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "match-standings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides looked up by variable name, then validate
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Some(rating) = lookup("INITIAL_RATING") {
            self.rating.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid INITIAL_RATING value: {}", rating))?;
        }
        if let Some(precision) = lookup("RATING_PRECISION") {
            self.rating.precision = precision.parse()?;
        }

        validate_config(&self)?;
        Ok(self)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    config.rating.validate()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RatingPrecision;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.rating.initial_rating, 1500.0);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup_from(&[
                ("LOG_LEVEL", "debug"),
                ("INITIAL_RATING", "1200"),
                ("RATING_PRECISION", "fractional"),
            ]))
            .unwrap();

        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.rating.initial_rating, 1200.0);
        assert_eq!(config.rating.precision, RatingPrecision::Fractional);
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(AppConfig::default()
            .with_overrides(lookup_from(&[("INITIAL_RATING", "lots")]))
            .is_err());
        assert!(AppConfig::default()
            .with_overrides(lookup_from(&[("INITIAL_RATING", "NaN")]))
            .is_err());
        assert!(AppConfig::default()
            .with_overrides(lookup_from(&[("LOG_LEVEL", "loud")]))
            .is_err());
        assert!(AppConfig::default()
            .with_overrides(lookup_from(&[("RATING_PRECISION", "exact")]))
            .is_err());
        assert!(AppConfig::default()
            .with_overrides(lookup_from(&[("SERVICE_NAME", "")]))
            .is_err());
    }

    #[test]
    fn test_toml_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [service]
            log_level = "warn"

            [rating]
            initial_rating = 1000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.service.name, "match-standings");
        assert_eq!(config.rating.initial_rating, 1000.0);
        assert_eq!(config.rating.precision, RatingPrecision::Integer);
    }

    #[test]
    fn test_missing_config_file() {
        let result = AppConfig::from_file(Path::new("/nonexistent/match-standings.toml"));
        assert!(result.is_err());
    }
}
