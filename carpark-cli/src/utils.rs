//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands: configuration loading, database path resolution, database
//! opening, and plate parsing.

use crate::error::CliError;
use carpark::{Config, ConfigBuilder, Database, DatabaseConfig, LicensePlate};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load configuration from the data directory.
///
/// An explicit `--data-dir` redirects the `config.yaml` lookup as well
/// as the database location.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options and configuration.
///
/// Priority: `--data-dir` flag > `database_path` config key > default
/// (`~/.carpark/carpark.db`).
pub fn resolve_database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.join("carpark.db"));
    }

    if let Some(ref path) = config.database_path {
        return Ok(path.clone());
    }

    carpark::resolve_database_path().map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global, config)?;

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    // Slot count only matters on first initialization
    if let Some(slot_count) = config.slot_count {
        db_config = db_config.with_slot_count(slot_count);
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse a plate argument, mapping validation failures to an arguments
/// error.
pub fn parse_plate(raw: &str) -> Result<LicensePlate, CliError> {
    LicensePlate::new(raw).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_with_data_dir(dir: Option<PathBuf>) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir: dir,
            busy_timeout: None,
            disable_autoinit: false,
        }
    }

    #[test]
    fn test_resolve_database_path_prefers_flag() {
        let global = global_with_data_dir(Some(PathBuf::from("/tmp/lot")));
        let config = Config {
            database_path: Some(PathBuf::from("/elsewhere/park.db")),
            ..Config::default()
        };

        let path = resolve_database_path(&global, &config).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/lot/carpark.db"));
    }

    #[test]
    fn test_resolve_database_path_uses_config_key() {
        let global = global_with_data_dir(None);
        let config = Config {
            database_path: Some(PathBuf::from("/elsewhere/park.db")),
            ..Config::default()
        };

        let path = resolve_database_path(&global, &config).unwrap();
        assert_eq!(path, PathBuf::from("/elsewhere/park.db"));
    }

    #[test]
    fn test_parse_plate_rejects_blank() {
        let err = parse_plate("   ").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
