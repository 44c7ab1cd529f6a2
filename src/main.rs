//! Command line entry point for match-standings
//!
//! Evaluates rating and streak updates for a single match and prints the
//! result as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use match_standings::config::AppConfig;
use match_standings::{
    calculate_new_streak, EloRatingCalculator, MatchRatings, MatchResult, RatingCalculator,
    RatingPrecision, Standing, StandingsUpdater, Streak,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Match Standings - Elo rating and streak calculator
#[derive(Parser)]
#[command(
    name = "match-standings",
    version,
    about = "Calculate Elo ratings and win/loss streaks after a head-to-head match"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate new ratings for the winner and loser of a match
    Elo {
        /// Winner's rating before the match
        #[arg(short, long, allow_hyphen_values = true)]
        winner: f64,
        /// Loser's rating before the match
        #[arg(short, long, allow_hyphen_values = true)]
        loser: f64,
        /// Keep fractional ratings instead of rounding to whole points
        #[arg(long)]
        fractional: bool,
    },
    /// Calculate a competitor's new streak
    Streak {
        /// Match result: win, loss, 1 or -1
        #[arg(short, long, allow_hyphen_values = true)]
        result: MatchResult,
        /// Streak before the match
        #[arg(short, long, allow_hyphen_values = true)]
        existing: Option<Streak>,
    },
    /// Calculate both competitors' ratings and streaks
    Match {
        #[arg(long, allow_hyphen_values = true)]
        winner_rating: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        loser_rating: Option<f64>,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        winner_streak: Streak,
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        loser_streak: Streak,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(level) = &args.log_level {
        config.service.log_level = level.clone();
        match_standings::config::validate_config(&config)?;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(&args)?;

    init_logging(&config.service.log_level)?;
    info!("Starting {} v{}", config.service.name, match_standings::VERSION);
    debug!(?config, "Loaded configuration");

    let output = match args.command {
        Commands::Elo {
            winner,
            loser,
            fractional,
        } => {
            if fractional {
                config.rating.precision = RatingPrecision::Fractional;
            }
            let calculator = EloRatingCalculator::new(config.rating)?;
            let ratings = calculator.calculate_new_ratings(MatchRatings::new(winner, loser))?;
            serde_json::to_string_pretty(&ratings)?
        }
        Commands::Streak { result, existing } => {
            calculate_new_streak(result, existing).to_string()
        }
        Commands::Match {
            winner_rating,
            loser_rating,
            winner_streak,
            loser_streak,
        } => {
            let calculator = EloRatingCalculator::new(config.rating)?;
            let updater = StandingsUpdater::new(Arc::new(calculator));
            let initial = updater.initial_standing();

            let winner = Standing {
                rating: winner_rating.unwrap_or(initial.rating),
                streak: winner_streak,
            };
            let loser = Standing {
                rating: loser_rating.unwrap_or(initial.rating),
                streak: loser_streak,
            };
            serde_json::to_string_pretty(&updater.record_match(winner, loser)?)?
        }
    };

    println!("{}", output);
    Ok(())
}
