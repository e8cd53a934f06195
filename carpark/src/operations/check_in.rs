//! Check-in operation.
//!
//! Registers the vehicle on first sight and opens a new active movement,
//! unless the plate already has one.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::Result;
use crate::plate::LicensePlate;
use crate::timestamp;

/// Options for the check-in operation.
#[derive(Debug, Clone)]
pub struct CheckInOptions {
    /// License plate of the arriving vehicle.
    pub plate: LicensePlate,
    /// Vehicle type label, e.g. "Toyota Corolla".
    pub vehicle_type: String,
    /// Optional owner gender, recorded verbatim.
    pub owner_gender: Option<String>,
    /// Optional passenger indicator, recorded verbatim.
    pub passengers: Option<String>,
}

impl CheckInOptions {
    /// Creates check-in options for a plate and vehicle type.
    #[must_use]
    pub fn new(plate: LicensePlate, vehicle_type: impl Into<String>) -> Self {
        Self {
            plate,
            vehicle_type: vehicle_type.into(),
            owner_gender: None,
            passengers: None,
        }
    }

    /// Sets the owner gender.
    #[must_use]
    pub fn with_owner_gender(mut self, gender: impl Into<String>) -> Self {
        self.owner_gender = Some(gender.into());
        self
    }

    /// Sets the passenger indicator.
    #[must_use]
    pub fn with_passengers(mut self, passengers: impl Into<String>) -> Self {
        self.passengers = Some(passengers.into());
        self
    }
}

/// Outcome of a check-in attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// A new movement was opened.
    CheckedIn {
        /// Id of the movement row that was created.
        movement_id: i64,
        /// Recorded check-in time.
        checkin_time: String,
    },
    /// The plate already has an active movement; nothing was changed.
    AlreadyCheckedIn,
}

impl CheckInOutcome {
    /// Whether the attempt changed the store.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::CheckedIn { .. })
    }
}

impl std::fmt::Display for CheckInOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckedIn { .. } => write!(f, "Vehicle checked in successfully!"),
            Self::AlreadyCheckedIn => write!(f, "Vehicle is already checked in."),
        }
    }
}

/// Executes a check-in.
///
/// Runs the active-movement check, vehicle registration, and movement
/// insert in one IMMEDIATE transaction. The vehicle row is created only
/// if the plate has never been seen; an existing row keeps its original
/// vehicle type.
///
/// # Errors
///
/// Returns an error if any database step fails. An already-active plate
/// is not an error; it yields [`CheckInOutcome::AlreadyCheckedIn`].
pub fn execute_check_in(db: &mut Database, options: &CheckInOptions) -> Result<CheckInOutcome> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let active = Database::find_active_movements(&tx, &options.plate)?;
    if !active.is_empty() {
        return Ok(CheckInOutcome::AlreadyCheckedIn);
    }

    Database::ensure_vehicle(&tx, &options.plate, &options.vehicle_type)?;

    let checkin_time = timestamp::now();
    let movement_id = Database::insert_movement(
        &tx,
        &options.plate,
        options.owner_gender.as_deref(),
        options.passengers.as_deref(),
        &checkin_time,
    )?;

    tx.commit()?;

    Ok(CheckInOutcome::CheckedIn {
        movement_id,
        checkin_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, test_plate};

    #[test]
    fn test_check_in_new_vehicle() {
        let mut db = create_test_database();
        let options = CheckInOptions::new(test_plate("KAA001A"), "Toyota Corolla")
            .with_owner_gender("Female")
            .with_passengers("Y");

        let outcome = execute_check_in(&mut db, &options).unwrap();
        assert!(outcome.changed());
        assert_eq!(outcome.to_string(), "Vehicle checked in successfully!");

        let vehicle = Database::get_vehicle(db.connection(), &options.plate)
            .unwrap()
            .unwrap();
        assert_eq!(vehicle.vehicle_type, "Toyota Corolla");

        let active = Database::find_active_movements(db.connection(), &options.plate).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].owner_gender.as_deref(), Some("Female"));
        assert_eq!(active[0].passengers.as_deref(), Some("Y"));
    }

    #[test]
    fn test_check_in_while_active_is_rejected() {
        let mut db = create_test_database();
        let options = CheckInOptions::new(test_plate("KAA001A"), "Toyota Corolla");

        execute_check_in(&mut db, &options).unwrap();
        let second = execute_check_in(&mut db, &options).unwrap();

        assert_eq!(second, CheckInOutcome::AlreadyCheckedIn);
        assert_eq!(second.to_string(), "Vehicle is already checked in.");

        // No second movement row was opened
        let active = Database::find_active_movements(db.connection(), &options.plate).unwrap();
        assert_eq!(active.len(), 1);
    }

    #[test]
    fn test_check_in_keeps_original_vehicle_type() {
        let mut db = create_test_database();
        let plate = test_plate("KAA001A");

        execute_check_in(&mut db, &CheckInOptions::new(plate.clone(), "Toyota Corolla")).unwrap();

        // Close the movement by hand, then check in again with a
        // different type
        let active = Database::find_active_movements(db.connection(), &plate).unwrap();
        Database::close_movement(db.connection(), active[0].id, "2024-01-01 17:00:00").unwrap();

        execute_check_in(&mut db, &CheckInOptions::new(plate.clone(), "Honda Civic")).unwrap();

        let vehicle = Database::get_vehicle(db.connection(), &plate).unwrap().unwrap();
        assert_eq!(vehicle.vehicle_type, "Toyota Corolla");
    }
}
