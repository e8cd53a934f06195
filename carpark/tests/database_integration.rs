//! Integration tests for database initialization and seeding.

mod common;

use carpark::{Database, DatabaseConfig, Error};
use common::{open_test_database, plate};

#[test]
fn fresh_database_is_fully_seeded() {
    let (_dir, db) = open_test_database();

    let slots = Database::list_slots(db.connection()).unwrap();
    assert_eq!(slots.len(), 10);
    assert!(slots
        .iter()
        .all(|s| s.status == carpark::SlotStatus::Available));

    let models = Database::list_vehicle_models(db.connection()).unwrap();
    assert!(models.len() > 100);

    let brands = Database::list_brands(db.connection()).unwrap();
    assert!(brands.contains(&"Toyota".to_string()));
    assert!(brands.contains(&"Tesla".to_string()));
}

#[test]
fn reopening_does_not_reseed() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("carpark.db");

    let first_models;
    {
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        first_models = Database::list_vehicle_models(db.connection())
            .unwrap()
            .len();
    }

    for _ in 0..3 {
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert_eq!(
            Database::list_slots(db.connection()).unwrap().len(),
            10,
            "slot rows must not accumulate across reopens"
        );
        assert_eq!(
            Database::list_vehicle_models(db.connection())
                .unwrap()
                .len(),
            first_models,
            "model rows must not accumulate across reopens"
        );
    }
}

#[test]
fn custom_slot_count_is_honored_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("carpark.db");

    {
        let db = Database::open(DatabaseConfig::new(&path).with_slot_count(3)).unwrap();
        assert_eq!(Database::list_slots(db.connection()).unwrap().len(), 3);
    }

    // A different count on reopen is ignored for an initialized store
    let db = Database::open(DatabaseConfig::new(&path).with_slot_count(50)).unwrap();
    assert_eq!(Database::list_slots(db.connection()).unwrap().len(), 3);
}

#[test]
fn schema_version_mismatch_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("carpark.db");

    {
        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        db.connection()
            .execute(
                "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
                [],
            )
            .unwrap();
    }

    let result = Database::open(DatabaseConfig::new(&path));
    assert!(matches!(
        result,
        Err(Error::UnsupportedSchemaVersion { found: 999, .. })
    ));
}

#[test]
fn store_level_guard_blocks_duplicate_active_movements() {
    let (_dir, db) = open_test_database();

    Database::insert_movement(
        db.connection(),
        &plate("KAA001A"),
        None,
        None,
        "2024-01-01 09:00:00",
    )
    .unwrap();

    // Bypassing the operation layer entirely, the partial unique index
    // still refuses a second active row.
    let result = Database::insert_movement(
        db.connection(),
        &plate("KAA001A"),
        None,
        None,
        "2024-01-01 10:00:00",
    );
    assert!(matches!(result, Err(Error::Database(_))));
}

#[test]
fn integrity_check_passes_on_healthy_store() {
    let (_dir, mut db) = open_test_database();
    db.verify_integrity().unwrap();
}
