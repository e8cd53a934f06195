//! # carpark
//!
//! A library for managing the day-to-day operations of a small parking
//! lot: vehicle check-in and check-out, slot reservations, and the
//! reference data behind them, all persisted in a local `SQLite` store.
//!
//! ## Features
//!
//! - **Check-in / check-out**: one active movement per plate, enforced
//!   both by the operation and by a partial unique index in the store
//! - **Reservations**: one active reservation per plate against a fixed
//!   set of pre-provisioned slots
//! - **Typed outcomes**: business results ("already checked in") are
//!   enum values; errors are reserved for store and input failures
//! - **Atomic operations**: every lifecycle operation runs in a single
//!   IMMEDIATE transaction
//!
//! ## Example
//!
//! ```no_run
//! use carpark::{Database, DatabaseConfig, LicensePlate};
//! use carpark::operations::{execute_check_in, CheckInOptions};
//!
//! # fn main() -> carpark::Result<()> {
//! let config = DatabaseConfig::new("/tmp/carpark.db");
//! let mut db = Database::open(config)?;
//!
//! let plate = LicensePlate::new("KAA 001A")?;
//! let options = CheckInOptions::new(plate, "Toyota Corolla");
//! let outcome = execute_check_in(&mut db, &options)?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod movement;
pub mod operations;
pub mod plate;
pub mod reservation;
pub mod slot;
pub mod timestamp;
pub mod vehicle;

pub use config::{Config, ConfigBuilder};
pub use database::{default_data_dir, resolve_database_path, Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use movement::Movement;
pub use operations::{
    execute_cancel_reservation, execute_check_in, execute_check_out, execute_reserve,
    CancelOptions, CancelOutcome, CheckInOptions, CheckInOutcome, CheckOutOptions,
    CheckOutOutcome, ReserveOptions, ReserveOutcome,
};
pub use plate::{InvalidPlateError, LicensePlate};
pub use reservation::{Reservation, ReservationStatus};
pub use slot::{InvalidSlotError, Slot, SlotNumber, SlotStatus};
pub use vehicle::{Vehicle, VehicleModel};
