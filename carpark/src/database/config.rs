//! Database configuration and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

use super::schema::DEFAULT_SLOT_COUNT;

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use carpark::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/carpark.db")
///     .with_busy_timeout(Duration::from_millis(10000))
///     .with_slot_count(20);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// Whether to open the database in read-only mode.
    pub read_only: bool,
    /// Number of parking slots to provision on first initialization.
    /// Has no effect on an already-initialized database.
    pub slot_count: u32,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `read_only`: false
    /// - `slot_count`: 10
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            read_only: false,
            slot_count: DEFAULT_SLOT_COUNT,
        }
    }

    /// Sets the busy timeout duration.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the number of slots provisioned on first initialization.
    #[must_use]
    pub fn with_slot_count(mut self, count: u32) -> Self {
        self.slot_count = count;
        self
    }

    /// Configures the database to be opened in read-only mode.
    ///
    /// When read-only is enabled, `auto_create` is automatically disabled.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory for carpark.
///
/// The default directory is `~/.carpark` on Unix-like systems and
/// `%USERPROFILE%\.carpark` on Windows.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".carpark"))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$CARPARK_DATA_DIR/carpark.db` if `CARPARK_DATA_DIR` is set
/// 2. `~/.carpark/carpark.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `CARPARK_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("CARPARK_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join("carpark.db"))
    } else {
        Ok(default_data_dir()?.join("carpark.db"))
    }
}
