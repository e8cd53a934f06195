//! Database CRUD operations for vehicles, movements, reservations, and
//! slots.
//!
//! Every query here returns a typed `Result`: a store failure is an
//! `Error::Database`, and "no matching rows" is an `Ok` empty value. The
//! two are never conflated. Write helpers take a plain `Connection` so
//! the lifecycle operations can compose them inside one transaction.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::movement::Movement;
use crate::plate::LicensePlate;
use crate::reservation::{Reservation, ReservationStatus};
use crate::slot::{Slot, SlotNumber, SlotStatus};
use crate::vehicle::{Vehicle, VehicleModel};

use super::connection::Database;

// SQL statements for CRUD operations

const INSERT_VEHICLE: &str = r"
    INSERT OR IGNORE INTO Vehicles (license_plate, vehicle_type)
    VALUES (?, ?)
";

const SELECT_VEHICLE: &str = r"
    SELECT id, license_plate, vehicle_type
    FROM Vehicles
    WHERE license_plate = ?
";

const INSERT_MOVEMENT: &str = r"
    INSERT INTO VehicleMovements
    (license_plate, owner_gender, checked_in, checked_out, checkin_time, passengers)
    VALUES (?, ?, 1, 0, ?, ?)
";

const SELECT_ACTIVE_MOVEMENTS_FOR_PLATE: &str = r"
    SELECT id, license_plate, owner_gender, checked_in, checked_out,
           checkin_time, checkout_time, passengers
    FROM VehicleMovements
    WHERE license_plate = ? AND checked_in = 1 AND checked_out = 0
    ORDER BY id
";

const CLOSE_MOVEMENT: &str = r"
    UPDATE VehicleMovements
    SET checked_out = 1, checked_in = 0, checkout_time = ?
    WHERE id = ?
";

const LIST_ACTIVE_MOVEMENTS: &str = r"
    SELECT id, license_plate, owner_gender, checked_in, checked_out,
           checkin_time, checkout_time, passengers
    FROM VehicleMovements
    WHERE checked_in = 1 AND checked_out = 0
    ORDER BY id
";

const LIST_COMPLETED_MOVEMENTS: &str = r"
    SELECT id, license_plate, owner_gender, checked_in, checked_out,
           checkin_time, checkout_time, passengers
    FROM VehicleMovements
    WHERE checked_in = 0 AND checked_out = 1
    ORDER BY id
";

const SELECT_MOVEMENTS_FOR_PLATE: &str = r"
    SELECT id, license_plate, owner_gender, checked_in, checked_out,
           checkin_time, checkout_time, passengers
    FROM VehicleMovements
    WHERE license_plate = ?
    ORDER BY id
";

const COUNT_ACTIVE_RESERVATIONS: &str = r"
    SELECT COUNT(*) FROM Reservations
    WHERE license_plate = ? AND status = 'active'
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO Reservations
    (license_plate, reservation_start, reservation_end, slot_number, reserved_on, status)
    VALUES (?, ?, ?, ?, ?, 'active')
";

// Deliberately unconditional on status: cancellation flips every row
// the plate has ever had, historical ones included.
const CANCEL_RESERVATIONS_FOR_PLATE: &str = r"
    UPDATE Reservations SET status = 'cancelled' WHERE license_plate = ?
";

const LIST_RESERVATIONS: &str = r"
    SELECT id, license_plate, reservation_start, reservation_end,
           slot_number, reserved_on, status
    FROM Reservations
    ORDER BY id
";

const SELECT_RESERVATIONS_FOR_PLATE: &str = r"
    SELECT id, license_plate, reservation_start, reservation_end,
           slot_number, reserved_on, status
    FROM Reservations
    WHERE license_plate = ?
    ORDER BY id
";

const SELECT_SLOT_STATUS: &str = r"
    SELECT status FROM ParkingSlots WHERE slot_number = ?
";

const UPDATE_SLOT_STATUS: &str = r"
    UPDATE ParkingSlots SET status = ? WHERE slot_number = ?
";

const LIST_AVAILABLE_SLOTS: &str = r"
    SELECT slot_number FROM ParkingSlots
    WHERE status = 'available'
    ORDER BY slot_number
";

const LIST_SLOTS: &str = r"
    SELECT slot_number, status FROM ParkingSlots ORDER BY slot_number
";

const LIST_MODELS: &str = r"
    SELECT brand, model FROM VehicleModels ORDER BY brand, model
";

const LIST_BRANDS: &str = r"
    SELECT DISTINCT brand FROM VehicleModels ORDER BY brand
";

/// Helper to deserialize a movement from a database row.
///
/// Expects row fields in this order: id, `license_plate`, `owner_gender`,
/// `checked_in`, `checked_out`, `checkin_time`, `checkout_time`, passengers.
fn row_to_movement(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movement> {
    let plate: String = row.get(1)?;
    let plate = LicensePlate::new(plate)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Movement {
        id: row.get(0)?,
        plate,
        owner_gender: row.get(2)?,
        checked_in: row.get(3)?,
        checked_out: row.get(4)?,
        checkin_time: row.get(5)?,
        checkout_time: row.get(6)?,
        passengers: row.get(7)?,
    })
}

/// Helper to deserialize a reservation from a database row.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let plate: String = row.get(1)?;
    let plate = LicensePlate::new(plate)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let slot: i64 = row.get(4)?;
    let slot_number = SlotNumber::try_from(slot)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    let status: String = row.get(6)?;
    let status: ReservationStatus = status
        .parse()
        .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;

    Ok(Reservation {
        id: row.get(0)?,
        plate,
        reservation_start: row.get(2)?,
        reservation_end: row.get(3)?,
        slot_number,
        reserved_on: row.get(5)?,
        status,
    })
}

impl Database {
    /// Inserts the vehicle row for a plate if it does not already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a new vehicle row was created
    /// - `Ok(false)` if the plate was already registered
    pub fn ensure_vehicle(
        conn: &Connection,
        plate: &LicensePlate,
        vehicle_type: &str,
    ) -> Result<bool> {
        let rows = conn.execute(INSERT_VEHICLE, params![plate.as_str(), vehicle_type])?;
        Ok(rows > 0)
    }

    /// Retrieves the vehicle row for a plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_vehicle(conn: &Connection, plate: &LicensePlate) -> Result<Option<Vehicle>> {
        match conn.query_row(SELECT_VEHICLE, params![plate.as_str()], |row| {
            let raw: String = row.get(1)?;
            let plate = LicensePlate::new(raw)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            Ok(Vehicle {
                id: row.get(0)?,
                plate,
                vehicle_type: row.get(2)?,
            })
        }) {
            Ok(vehicle) => Ok(Some(vehicle)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts a new active movement row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a constraint
    /// failure from the one-active-movement guard index.
    pub fn insert_movement(
        conn: &Connection,
        plate: &LicensePlate,
        owner_gender: Option<&str>,
        passengers: Option<&str>,
        checkin_time: &str,
    ) -> Result<i64> {
        conn.execute(
            INSERT_MOVEMENT,
            params![plate.as_str(), owner_gender, checkin_time, passengers],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Finds all active movement rows for a plate.
    ///
    /// If the invariant holds this returns zero or one rows; callers that
    /// mutate must treat more than one as an internal-consistency error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_active_movements(
        conn: &Connection,
        plate: &LicensePlate,
    ) -> Result<Vec<Movement>> {
        let mut stmt = conn.prepare(SELECT_ACTIVE_MOVEMENTS_FOR_PLATE)?;
        let movements = stmt
            .query_map(params![plate.as_str()], row_to_movement)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(movements)
    }

    /// Closes a movement row: flips the flags and records the check-out time.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the row was found and closed
    /// - `Ok(false)` if no row with that id exists
    pub fn close_movement(conn: &Connection, movement_id: i64, checkout_time: &str) -> Result<bool> {
        let rows = conn.execute(CLOSE_MOVEMENT, params![checkout_time, movement_id])?;
        Ok(rows > 0)
    }

    /// Lists all active movements (vehicles currently inside the lot).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_active_movements(conn: &Connection) -> Result<Vec<Movement>> {
        let mut stmt = conn.prepare(LIST_ACTIVE_MOVEMENTS)?;
        let movements = stmt
            .query_map([], row_to_movement)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(movements)
    }

    /// Lists all completed movements (closed history rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_completed_movements(conn: &Connection) -> Result<Vec<Movement>> {
        let mut stmt = conn.prepare(LIST_COMPLETED_MOVEMENTS)?;
        let movements = stmt
            .query_map([], row_to_movement)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(movements)
    }

    /// Lists every movement row for a plate, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn movements_for_plate(conn: &Connection, plate: &LicensePlate) -> Result<Vec<Movement>> {
        let mut stmt = conn.prepare(SELECT_MOVEMENTS_FOR_PLATE)?;
        let movements = stmt
            .query_map(params![plate.as_str()], row_to_movement)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(movements)
    }

    /// Counts active reservation rows for a plate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_active_reservations(conn: &Connection, plate: &LicensePlate) -> Result<i64> {
        let count: i64 = conn.query_row(COUNT_ACTIVE_RESERVATIONS, params![plate.as_str()], |row| {
            row.get(0)
        })?;
        Ok(count)
    }

    /// Inserts a new active reservation row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_reservation(
        conn: &Connection,
        plate: &LicensePlate,
        reservation_start: &str,
        reservation_end: &str,
        slot: SlotNumber,
        reserved_on: &str,
    ) -> Result<i64> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                plate.as_str(),
                reservation_start,
                reservation_end,
                slot.value(),
                reserved_on,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Marks every reservation row for a plate as cancelled.
    ///
    /// This intentionally touches historical rows too, not just the
    /// active one.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// The number of rows updated.
    pub fn cancel_reservations_for_plate(conn: &Connection, plate: &LicensePlate) -> Result<usize> {
        let rows = conn.execute(CANCEL_RESERVATIONS_FOR_PLATE, params![plate.as_str()])?;
        Ok(rows)
    }

    /// Lists all reservation rows, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be deserialized.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Lists every reservation row for a plate, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservations_for_plate(
        conn: &Connection,
        plate: &LicensePlate,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATIONS_FOR_PLATE)?;
        let reservations = stmt
            .query_map(params![plate.as_str()], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Gets the status of a slot, or `None` if the slot is not part of
    /// the provisioned set.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored status text is
    /// unrecognized.
    pub fn slot_status(conn: &Connection, slot: SlotNumber) -> Result<Option<SlotStatus>> {
        match conn.query_row(SELECT_SLOT_STATUS, params![slot.value()], |row| {
            row.get::<_, String>(0)
        }) {
            Ok(text) => {
                let status = text.parse().map_err(|e: String| Error::DatabaseCorruption {
                    details: format!("slot {slot}: {e}"),
                })?;
                Ok(Some(status))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Sets the status of a slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the slot row was updated
    /// - `Ok(false)` if no such slot exists
    pub fn set_slot_status(conn: &Connection, slot: SlotNumber, status: SlotStatus) -> Result<bool> {
        let rows = conn.execute(
            UPDATE_SLOT_STATUS,
            params![status.to_string(), slot.value()],
        )?;
        Ok(rows > 0)
    }

    /// Lists the numbers of all currently available slots, ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_available_slots(conn: &Connection) -> Result<Vec<SlotNumber>> {
        let mut stmt = conn.prepare(LIST_AVAILABLE_SLOTS)?;
        let slots = stmt
            .query_map([], |row| {
                let value: i64 = row.get(0)?;
                SlotNumber::try_from(value)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(slots)
    }

    /// Lists all slots with their status, ascending by number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_slots(conn: &Connection) -> Result<Vec<Slot>> {
        let mut stmt = conn.prepare(LIST_SLOTS)?;
        let slots = stmt
            .query_map([], |row| {
                let value: i64 = row.get(0)?;
                let number = SlotNumber::try_from(value)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
                let status: String = row.get(1)?;
                let status = status
                    .parse()
                    .map_err(|e: String| rusqlite::Error::ToSqlConversionFailure(e.into()))?;
                Ok(Slot { number, status })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(slots)
    }

    /// Lists the brand/model reference rows, sorted by brand then model.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_vehicle_models(conn: &Connection) -> Result<Vec<VehicleModel>> {
        let mut stmt = conn.prepare(LIST_MODELS)?;
        let models = stmt
            .query_map([], |row| {
                Ok(VehicleModel {
                    brand: row.get(0)?,
                    model: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(models)
    }

    /// Lists the distinct vehicle brands, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_brands(conn: &Connection) -> Result<Vec<String>> {
        let mut stmt = conn.prepare(LIST_BRANDS)?;
        let brands = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(brands)
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
