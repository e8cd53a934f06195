//! End-to-end tests for the carpark binary.
//!
//! Every test runs against its own temp data directory via `--data-dir`,
//! so tests never touch the user's real store and can run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn carpark(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("carpark").unwrap();
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

#[test]
fn check_in_and_double_check_in() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle checked in successfully!"));

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle is already checked in."));
}

#[test]
fn check_out_flow() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Honda Civic"])
        .assert()
        .success();

    carpark(&dir)
        .args(["check-out", "KAA001A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vehicle checked out successfully!",
        ));

    carpark(&dir)
        .args(["check-out", "KAA001A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vehicle is not currently checked in or already checked out.",
        ));
}

#[test]
fn reserve_cancel_and_slot_states() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args([
            "reserve",
            "KAA001A",
            "--start",
            "2024-01-01 09:00:00",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            "4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reservation added successfully!"));

    // Slot 4 no longer available
    carpark(&dir)
        .args(["slots", "--available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4\tavailable").not());

    // Second plate on the same slot fails with the slot exit code
    carpark(&dir)
        .args([
            "reserve",
            "KBB002B",
            "--start",
            "2024-01-01 09:00:00",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            "4",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already occupied"));

    carpark(&dir)
        .args(["cancel", "KAA001A"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reservation KAA001A cancelled successfully.",
        ));

    carpark(&dir)
        .args(["slots", "--available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4\tavailable"));
}

#[test]
fn already_reserved_is_not_an_error() {
    let dir = TempDir::new().unwrap();

    let reserve = |slot: &str| {
        let mut cmd = Command::cargo_bin("carpark").unwrap();
        cmd.arg("--data-dir").arg(dir.path()).args([
            "reserve",
            "KAA001A",
            "--start",
            "2024-01-01 09:00:00",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            slot,
        ]);
        cmd
    };

    reserve("4").assert().success();
    reserve("5")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vehicle is already reserved."));
}

#[test]
fn unknown_slot_is_rejected() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args([
            "reserve",
            "KAA001A",
            "--start",
            "2024-01-01 09:00:00",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            "99",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn malformed_timestamp_is_rejected() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args([
            "reserve",
            "KAA001A",
            "--start",
            "next tuesday",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            "4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match"));
}

#[test]
fn blank_plate_is_an_argument_error() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "   ", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn list_filters_by_plate_substring() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .success();
    carpark(&dir)
        .args(["check-in", "KBB002B", "--vehicle-type", "Honda Civic"])
        .assert()
        .success();

    carpark(&dir)
        .args(["list", "active", "--filter", "KAA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KAA001A"))
        .stdout(predicate::str::contains("KBB002B").not());
}

#[test]
fn list_reservations_as_json() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args([
            "reserve",
            "KAA001A",
            "--start",
            "2024-01-01 09:00:00",
            "--end",
            "2024-01-01 17:00:00",
            "--slot",
            "7",
        ])
        .assert()
        .success();

    carpark(&dir)
        .args(["list", "reservations", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"plate\": \"KAA001A\""))
        .stdout(predicate::str::contains("\"slot\": 7"))
        .stdout(predicate::str::contains("\"status\": \"active\""));
}

#[test]
fn list_csv_has_headers() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .success();

    carpark(&dir)
        .args(["list", "active", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "plate,owner_gender,checkin_time,checkout_time,passengers",
        ));
}

#[test]
fn models_lists_reference_data() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["models", "--brand", "Tesla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tesla\tModel 3"))
        .stdout(predicate::str::contains("Toyota").not());

    carpark(&dir)
        .args(["models", "--brands-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subaru"));
}

#[test]
fn status_reports_counts() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["check-in", "KAA001A", "--vehicle-type", "Toyota Corolla"])
        .assert()
        .success();

    carpark(&dir)
        .args(["status", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"checked_in\": 1"))
        .stdout(predicate::str::contains("\"available_slots\": 10"));
}

#[test]
fn init_provisions_custom_slot_count() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["init", "--slot-count", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized with 4 slots"));

    // Idempotent: a second init reports the same provisioned count
    carpark(&dir)
        .args(["init", "--slot-count", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized with 4 slots"));

    // --overwrite starts fresh and honors the new count
    carpark(&dir)
        .args(["init", "--slot-count", "20", "--overwrite"])
        .assert()
        .success()
        .stdout(predicate::str::contains("initialized with 20 slots"));
}

#[test]
fn disable_autoinit_requires_existing_store() {
    let dir = TempDir::new().unwrap();

    carpark(&dir)
        .args(["--disable-autoinit", "list", "active"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));

    // After an explicit init the same command works
    carpark(&dir).arg("init").assert().success();
    carpark(&dir)
        .args(["--disable-autoinit", "list", "active"])
        .assert()
        .success();
}
