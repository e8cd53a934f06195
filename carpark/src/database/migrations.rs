//! Database schema management and seeding.
//!
//! This module handles schema initialization, version checking, and the
//! one-time seeding of parking slots and the vehicle model reference
//! table. The schema version row doubles as the seed guard: seed rows
//! are inserted only while the version is still 0, so re-running
//! initialization never duplicates them.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_ACTIVE_MOVEMENT_GUARD, CREATE_METADATA_TABLE, CREATE_MODELS_TABLE,
    CREATE_MOVEMENTS_TABLE, CREATE_MOVEMENT_PLATE_INDEX, CREATE_RESERVATIONS_TABLE,
    CREATE_RESERVATION_PLATE_INDEX, CREATE_RESERVATION_STATUS_INDEX, CREATE_SLOTS_TABLE,
    CREATE_VEHICLES_TABLE, CURRENT_SCHEMA_VERSION, INSERT_MODEL, INSERT_SCHEMA_VERSION,
    INSERT_SLOT, SELECT_SCHEMA_VERSION, VEHICLE_MODELS,
};

/// Initializes the database schema and seed data.
///
/// Creates all tables and indices, seeds `slot_count` parking slots
/// (all available) and the vehicle model reference rows, then records
/// the schema version. Intended for a database whose version is still 0;
/// `check_schema_compatibility` is the usual entry point.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```no_run
/// use rusqlite::Connection;
/// use carpark::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn, 10).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection, slot_count: u32) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_VEHICLES_TABLE, [])?;
    conn.execute(CREATE_MOVEMENTS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_SLOTS_TABLE, [])?;
    conn.execute(CREATE_MODELS_TABLE, [])?;

    conn.execute(CREATE_MOVEMENT_PLATE_INDEX, [])?;
    conn.execute(CREATE_ACTIVE_MOVEMENT_GUARD, [])?;
    conn.execute(CREATE_RESERVATION_PLATE_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_STATUS_INDEX, [])?;

    seed_slots(conn, slot_count)?;
    seed_models(conn)?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Seeds the fixed slot set, all available.
fn seed_slots(conn: &Connection, slot_count: u32) -> Result<()> {
    let mut stmt = conn.prepare(INSERT_SLOT)?;
    for slot in 1..=slot_count {
        stmt.execute(params![slot])?;
    }
    Ok(())
}

/// Seeds the vehicle brand/model reference rows.
fn seed_models(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(INSERT_MODEL)?;
    for (brand, model) in VEHICLE_MODELS {
        stmt.execute(params![brand, model])?;
    }
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" or a missing metadata table (both of which
/// indicate version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    // metadata table doesn't exist yet
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized and seeded; a version
/// mismatch in either direction is an error.
///
/// # Errors
///
/// Returns an error if the stored version differs from
/// [`CURRENT_SCHEMA_VERSION`], or if initialization fails.
pub fn check_schema_compatibility(conn: &Connection, slot_count: u32) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn, slot_count)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
