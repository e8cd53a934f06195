//! Reservation cancellation.
//!
//! Cancels every reservation row a plate has and frees the slots that
//! were held by the active ones. Cancelling a plate with no rows still
//! succeeds; the outcome reports zero rows touched.

use std::collections::BTreeSet;

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::Result;
use crate::plate::LicensePlate;
use crate::slot::{SlotNumber, SlotStatus};

/// Options for the cancellation operation.
#[derive(Debug, Clone)]
pub struct CancelOptions {
    /// License plate whose reservations are cancelled.
    pub plate: LicensePlate,
}

impl CancelOptions {
    /// Creates cancellation options for a plate.
    #[must_use]
    pub const fn new(plate: LicensePlate) -> Self {
        Self { plate }
    }
}

/// Outcome of a cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOutcome {
    /// The plate the cancellation applied to.
    pub plate: LicensePlate,
    /// Total reservation rows flipped to cancelled, historical included.
    pub cancelled_rows: usize,
    /// Slots released back to available, ascending.
    pub freed_slots: Vec<SlotNumber>,
}

impl std::fmt::Display for CancelOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reservation {} cancelled successfully.", self.plate)
    }
}

/// Executes a cancellation.
///
/// Every reservation row for the plate is marked cancelled, not just the
/// active one. Only slots held by rows that were active before the
/// update are freed.
///
/// # Errors
///
/// Returns an error if any database step fails.
pub fn execute_cancel_reservation(
    db: &mut Database,
    options: &CancelOptions,
) -> Result<CancelOutcome> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let slots_to_free: BTreeSet<SlotNumber> = Database::reservations_for_plate(&tx, &options.plate)?
        .into_iter()
        .filter(crate::reservation::Reservation::is_active)
        .map(|r| r.slot_number)
        .collect();

    let cancelled_rows = Database::cancel_reservations_for_plate(&tx, &options.plate)?;

    for slot in &slots_to_free {
        Database::set_slot_status(&tx, *slot, SlotStatus::Available)?;
    }

    tx.commit()?;

    Ok(CancelOutcome {
        plate: options.plate.clone(),
        cancelled_rows,
        freed_slots: slots_to_free.into_iter().collect(),
    })
}
