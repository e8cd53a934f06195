//! Integration tests for the check-in/check-out lifecycle.

mod common;

use carpark::operations::{
    execute_check_in, execute_check_out, CheckInOptions, CheckInOutcome, CheckOutOptions,
    CheckOutOutcome,
};
use carpark::{Database, DatabaseConfig};
use common::{open_test_database, plate};

#[test]
fn check_in_registers_vehicle_and_opens_movement() {
    let (_dir, mut db) = open_test_database();
    let options = CheckInOptions::new(plate("KAA001A"), "Toyota Corolla")
        .with_owner_gender("Female")
        .with_passengers("N");

    let outcome = execute_check_in(&mut db, &options).unwrap();
    assert!(matches!(outcome, CheckInOutcome::CheckedIn { .. }));

    let vehicle = Database::get_vehicle(db.connection(), &plate("KAA001A"))
        .unwrap()
        .expect("vehicle should exist after check-in");
    assert_eq!(vehicle.vehicle_type, "Toyota Corolla");

    let active = Database::list_active_movements(db.connection()).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].plate, plate("KAA001A"));
}

#[test]
fn double_check_in_is_a_noop_outcome() {
    let (_dir, mut db) = open_test_database();
    let options = CheckInOptions::new(plate("KAA001A"), "Toyota Corolla");

    execute_check_in(&mut db, &options).unwrap();
    let second = execute_check_in(&mut db, &options).unwrap();

    assert_eq!(second, CheckInOutcome::AlreadyCheckedIn);
    assert_eq!(
        Database::movements_for_plate(db.connection(), &plate("KAA001A"))
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn check_out_closes_the_movement() {
    let (_dir, mut db) = open_test_database();

    execute_check_in(
        &mut db,
        &CheckInOptions::new(plate("KAA001A"), "Honda Civic"),
    )
    .unwrap();
    let outcome = execute_check_out(&mut db, &CheckOutOptions::new(plate("KAA001A"))).unwrap();
    assert!(matches!(outcome, CheckOutOutcome::CheckedOut { .. }));

    assert!(Database::list_active_movements(db.connection())
        .unwrap()
        .is_empty());
    let completed = Database::list_completed_movements(db.connection()).unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed[0].checkout_time.is_some());
}

#[test]
fn check_out_of_unknown_plate_is_a_noop_outcome() {
    let (_dir, mut db) = open_test_database();

    let outcome = execute_check_out(&mut db, &CheckOutOptions::new(plate("KZZ999Z"))).unwrap();
    assert_eq!(outcome, CheckOutOutcome::NotCheckedIn);
}

#[test]
fn full_round_trips_accumulate_history() {
    let (_dir, mut db) = open_test_database();
    let options = CheckInOptions::new(plate("KAA001A"), "Toyota Corolla");

    for _ in 0..3 {
        execute_check_in(&mut db, &options).unwrap();
        execute_check_out(&mut db, &CheckOutOptions::new(plate("KAA001A"))).unwrap();
    }

    let history = Database::movements_for_plate(db.connection(), &plate("KAA001A")).unwrap();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(carpark::Movement::is_completed));

    // The vehicle row is still the one created on the first check-in
    let vehicle = Database::get_vehicle(db.connection(), &plate("KAA001A"))
        .unwrap()
        .unwrap();
    assert_eq!(vehicle.vehicle_type, "Toyota Corolla");
}

#[test]
fn state_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("carpark.db");

    {
        let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
        execute_check_in(
            &mut db,
            &CheckInOptions::new(plate("KAA001A"), "Toyota Corolla"),
        )
        .unwrap();
    }

    let mut db = Database::open(DatabaseConfig::new(&path)).unwrap();
    let active = Database::list_active_movements(db.connection()).unwrap();
    assert_eq!(active.len(), 1);

    // And the movement can still be closed after the reopen
    let outcome = execute_check_out(&mut db, &CheckOutOptions::new(plate("KAA001A"))).unwrap();
    assert!(matches!(outcome, CheckOutOutcome::CheckedOut { .. }));
}
