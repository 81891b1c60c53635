//! Command-line interface parsing for the trip planner
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --data catalog source override and the --trip-type flag for a
//! pre-selected preference.

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::data::catalog::DEFAULT_CATALOG_PATH;
use crate::data::CatalogSource;
use crate::plan::TripPreference;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified trip type is not recognized
    #[error("Invalid trip type: '{0}'. Valid trip types: any, romantic, cultural, city, historical, scenic, adventure, luxury, relaxation")]
    InvalidTripType(String),
}

/// Trip Planner CLI - Pick a destination and get a trip plan
#[derive(Parser, Debug)]
#[command(name = "tripplan")]
#[command(about = "Destination catalog browsing and trip planning")]
#[command(version)]
pub struct Cli {
    /// Catalog source: a JSON file path or an http(s) URL
    #[arg(long, value_name = "SOURCE", default_value = DEFAULT_CATALOG_PATH)]
    pub data: String,

    /// Pre-select a trip-type preference
    ///
    /// Examples:
    ///   tripplan --trip-type romantic
    ///   tripplan --trip-type city
    ///
    /// Valid trip types: any, romantic, cultural, city, historical,
    /// scenic, adventure, luxury, relaxation
    #[arg(long = "trip-type", value_name = "TYPE")]
    pub trip_type: Option<String>,

    /// Verbosity for diagnostics (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Where to load the destination catalog from
    pub catalog_source: CatalogSource,
    /// Initial trip-type preference (if specified)
    pub initial_preference: Option<TripPreference>,
}

/// Parses a trip-type string argument into a TripPreference.
///
/// # Arguments
/// * `s` - The trip-type string from CLI
///
/// # Returns
/// * `Ok(TripPreference)` if the string matches a valid option
/// * `Err(CliError::InvalidTripType)` if the string doesn't match
pub fn parse_trip_type_arg(s: &str) -> Result<TripPreference, CliError> {
    TripPreference::from_str(s).ok_or_else(|| CliError::InvalidTripType(s.to_string()))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if an invalid trip type was specified
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let initial_preference = match &cli.trip_type {
            None => None,
            Some(trip_type) => Some(parse_trip_type_arg(trip_type)?),
        };

        Ok(StartupConfig {
            catalog_source: CatalogSource::from_arg(&cli.data),
            initial_preference,
        })
    }
}

/// Initializes the diagnostic subscriber from the verbosity flag.
///
/// Verbosity maps to a level filter (WARN by default, then INFO, DEBUG,
/// TRACE); `RUST_LOG` directives are honored on top. Output goes to stderr
/// so it stays out of the alternate screen.
pub fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_trip_type_arg_known_values() {
        assert_eq!(parse_trip_type_arg("any").unwrap(), TripPreference::Any);
        assert_eq!(
            parse_trip_type_arg("romantic").unwrap(),
            TripPreference::Romantic
        );
        assert_eq!(
            parse_trip_type_arg("city").unwrap(),
            TripPreference::CityExploration
        );
        assert_eq!(
            parse_trip_type_arg("Relaxation").unwrap(),
            TripPreference::Relaxation
        );
    }

    #[test]
    fn test_parse_trip_type_arg_invalid() {
        let result = parse_trip_type_arg("volcanic");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid trip type"));
        assert!(err.to_string().contains("volcanic"));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["tripplan"]);
        assert_eq!(cli.data, DEFAULT_CATALOG_PATH);
        assert!(cli.trip_type.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_data_override() {
        let cli = Cli::parse_from(["tripplan", "--data", "custom.json"]);
        assert_eq!(cli.data, "custom.json");
    }

    #[test]
    fn test_cli_parse_verbosity_count() {
        let cli = Cli::parse_from(["tripplan", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_startup_config_default_source() {
        let cli = Cli::parse_from(["tripplan"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.catalog_source,
            CatalogSource::File(PathBuf::from(DEFAULT_CATALOG_PATH))
        );
        assert!(config.initial_preference.is_none());
    }

    #[test]
    fn test_startup_config_url_source() {
        let cli = Cli::parse_from([
            "tripplan",
            "--data",
            "https://example.com/destinations.json",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(
            config.catalog_source,
            CatalogSource::Url("https://example.com/destinations.json".to_string())
        );
    }

    #[test]
    fn test_startup_config_with_trip_type() {
        let cli = Cli::parse_from(["tripplan", "--trip-type", "scenic"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.initial_preference, Some(TripPreference::Scenic));
    }

    #[test]
    fn test_startup_config_invalid_trip_type() {
        let cli = Cli::parse_from(["tripplan", "--trip-type", "bogus"]);
        let result = StartupConfig::from_cli(&cli);
        assert!(result.is_err());
    }
}
