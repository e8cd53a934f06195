//! User configuration for the carpark tool.
//!
//! Configuration is optional: everything has a built-in default. A YAML
//! file at `~/.carpark/config.yaml` (or `$CARPARK_DATA_DIR/config.yaml`)
//! can override the database location, the provisioned slot count, and
//! the lock wait budget. CLI flags override file values in turn; that
//! precedence is applied by the caller, not here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::database::default_data_dir;
use crate::error::Result;

/// User-facing configuration knobs.
///
/// # Examples
///
/// ```
/// use carpark::Config;
///
/// let config = Config::default();
/// assert!(config.slot_count.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the database file, overriding the default location.
    pub database_path: Option<PathBuf>,

    /// Number of parking slots to provision when the database is first
    /// created. Ignored for an already-initialized database.
    pub slot_count: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,
}

/// Builder that loads configuration from disk with sensible fallbacks.
///
/// # Examples
///
/// ```no_run
/// use carpark::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a builder that looks in the default data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the directory searched for `config.yaml`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Loads the configuration file if present, or returns defaults.
    ///
    /// A missing file is not an error; a file that exists but cannot be
    /// read or parsed is.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// contains invalid YAML.
    pub fn build(self) -> Result<Config> {
        let dir = match self.data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Self::load_file(&dir.join("config.yaml"))
    }

    fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("config.yaml"),
            "slot_count: 25\nmaximum_lock_wait_seconds: 10\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_data_dir(dir.path())
            .build()
            .unwrap();
        assert_eq!(config.slot_count, Some(25));
        assert_eq!(config.maximum_lock_wait_seconds, Some(10));
        assert!(config.database_path.is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), "lot_capacity: 25\n").unwrap();

        let result = ConfigBuilder::new().with_data_dir(dir.path()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), "slot_count: [oops\n").unwrap();

        let result = ConfigBuilder::new().with_data_dir(dir.path()).build();
        assert!(result.is_err());
    }
}
