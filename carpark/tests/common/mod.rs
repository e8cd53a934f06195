//! Shared helpers for integration tests.

use carpark::{Database, DatabaseConfig, LicensePlate};
use tempfile::TempDir;

/// Opens a fresh database in a temp directory, returning both so the
/// directory outlives the handle.
pub fn open_test_database() -> (TempDir, Database) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = DatabaseConfig::new(dir.path().join("carpark.db"));
    let db = Database::open(config).expect("failed to open database");
    (dir, db)
}

/// Parses a plate literal.
pub fn plate(raw: &str) -> LicensePlate {
    LicensePlate::new(raw).expect("invalid test plate")
}
