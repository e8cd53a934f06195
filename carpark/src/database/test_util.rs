//! Test utilities for database operations.

use tempfile::tempdir;

use crate::plate::LicensePlate;

use super::config::DatabaseConfig;
use super::connection::Database;

/// Creates a test database backed by a temporary directory.
///
/// The temporary directory is intentionally leaked so the database file
/// outlives this function; the OS cleans it up.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(&path);
    let db = Database::open(config).expect("failed to open test database");
    std::mem::forget(dir);
    db
}

/// Parses a plate literal for tests.
///
/// # Panics
///
/// Panics if the literal is not a valid plate.
#[must_use]
pub fn test_plate(raw: &str) -> LicensePlate {
    LicensePlate::new(raw).expect("invalid test plate")
}
