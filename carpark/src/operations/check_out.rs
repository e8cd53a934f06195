//! Check-out operation.
//!
//! Closes the plate's single active movement, recording the departure
//! time. A plate with no active movement is a no-op outcome, not an
//! error; more than one active movement means the store invariant is
//! broken and the operation refuses to touch anything.

use rusqlite::TransactionBehavior;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::plate::LicensePlate;
use crate::timestamp;

/// Options for the check-out operation.
#[derive(Debug, Clone)]
pub struct CheckOutOptions {
    /// License plate of the departing vehicle.
    pub plate: LicensePlate,
}

impl CheckOutOptions {
    /// Creates check-out options for a plate.
    #[must_use]
    pub const fn new(plate: LicensePlate) -> Self {
        Self { plate }
    }
}

/// Outcome of a check-out attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutOutcome {
    /// The active movement was closed.
    CheckedOut {
        /// Id of the movement row that was closed.
        movement_id: i64,
        /// Recorded check-out time.
        checkout_time: String,
    },
    /// The plate has no active movement; nothing was changed.
    NotCheckedIn,
}

impl CheckOutOutcome {
    /// Whether the attempt changed the store.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::CheckedOut { .. })
    }
}

impl std::fmt::Display for CheckOutOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckedOut { .. } => write!(f, "Vehicle checked out successfully!"),
            Self::NotCheckedIn => write!(
                f,
                "Vehicle is not currently checked in or already checked out."
            ),
        }
    }
}

/// Executes a check-out.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if the plate somehow has more
/// than one active movement, or any database error. A plate that is not
/// inside the lot yields [`CheckOutOutcome::NotCheckedIn`].
pub fn execute_check_out(db: &mut Database, options: &CheckOutOptions) -> Result<CheckOutOutcome> {
    let tx = db
        .connection_mut()
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let active = Database::find_active_movements(&tx, &options.plate)?;

    let movement = match active.as_slice() {
        [] => return Ok(CheckOutOutcome::NotCheckedIn),
        [one] => one,
        many => {
            return Err(Error::InvariantViolation {
                details: format!(
                    "plate {} has {} active movements, expected at most one",
                    options.plate,
                    many.len()
                ),
            })
        }
    };

    let checkout_time = timestamp::now();
    Database::close_movement(&tx, movement.id, &checkout_time)?;

    tx.commit()?;

    Ok(CheckOutOutcome::CheckedOut {
        movement_id: movement.id,
        checkout_time,
    })
}
