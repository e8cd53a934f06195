//! Reservation operation.
//!
//! Adds a reservation for a plate against a specific slot. One active
//! reservation per plate; the slot must exist and be available. The
//! slot flips to occupied in the same transaction as the insert.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::plate::LicensePlate;
use crate::slot::{SlotNumber, SlotStatus};
use crate::timestamp;

/// Options for the reservation operation.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// License plate the reservation is for.
    pub plate: LicensePlate,
    /// Reservation window start, canonical wall-clock format.
    pub reservation_start: String,
    /// Reservation window end, canonical wall-clock format.
    pub reservation_end: String,
    /// Slot to reserve.
    pub slot: SlotNumber,
}

impl ReserveOptions {
    /// Creates reservation options.
    #[must_use]
    pub fn new(
        plate: LicensePlate,
        reservation_start: impl Into<String>,
        reservation_end: impl Into<String>,
        slot: SlotNumber,
    ) -> Self {
        Self {
            plate,
            reservation_start: reservation_start.into(),
            reservation_end: reservation_end.into(),
            slot,
        }
    }
}

/// Outcome of a reservation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// A reservation was added and the slot marked occupied.
    Added {
        /// Id of the reservation row that was created.
        reservation_id: i64,
        /// The reserved slot.
        slot: SlotNumber,
    },
    /// The plate already has an active reservation; nothing was changed.
    AlreadyReserved,
}

impl ReserveOutcome {
    /// Whether the attempt changed the store.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Added { .. })
    }
}

impl std::fmt::Display for ReserveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added { .. } => write!(f, "Reservation added successfully!"),
            Self::AlreadyReserved => write!(f, "Vehicle is already reserved."),
        }
    }
}

/// Executes a reservation.
///
/// The window endpoints are validated for parseability only; the store
/// does not compare them or check for overlaps with other reservations.
///
/// # Errors
///
/// Returns:
/// - [`Error::Validation`] if either timestamp is malformed
/// - [`Error::UnknownSlot`] if the slot is not provisioned
/// - [`Error::SlotOccupied`] if the slot is not available
/// - any database error
///
/// An existing active reservation for the plate is not an error; it
/// yields [`ReserveOutcome::AlreadyReserved`].
pub fn execute_reserve(db: &mut Database, options: &ReserveOptions) -> Result<ReserveOutcome> {
    timestamp::parse(&options.reservation_start)?;
    timestamp::parse(&options.reservation_end)?;

    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    if Database::count_active_reservations(&tx, &options.plate)? > 0 {
        return Ok(ReserveOutcome::AlreadyReserved);
    }

    match Database::slot_status(&tx, options.slot)? {
        None => return Err(Error::UnknownSlot { slot: options.slot }),
        Some(SlotStatus::Occupied) => return Err(Error::SlotOccupied { slot: options.slot }),
        Some(SlotStatus::Available) => {}
    }

    let reserved_on = timestamp::now();
    let reservation_id = Database::insert_reservation(
        &tx,
        &options.plate,
        &options.reservation_start,
        &options.reservation_end,
        options.slot,
        &reserved_on,
    )?;
    Database::set_slot_status(&tx, options.slot, SlotStatus::Occupied)?;

    tx.commit()?;

    Ok(ReserveOutcome::Added {
        reservation_id,
        slot: options.slot,
    })
}
