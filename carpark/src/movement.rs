//! Movement records for the check-in/check-out cycle.
//!
//! A movement row is created on check-in and mutated in place exactly
//! once, on check-out. Rows are never deleted: each completed cycle
//! leaves one closed row behind, so the table is an append-only history
//! per plate.
//!
//! Invariant: a plate has at most one row with `checked_in` set and
//! `checked_out` clear (the "active movement"). The store enforces this
//! with a partial unique index; the check-in operation also checks it
//! before inserting.

use serde::{Deserialize, Serialize};

use crate::plate::LicensePlate;

/// A single check-in attempt for a plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Row id in the store.
    pub id: i64,
    /// The plate this movement belongs to.
    pub plate: LicensePlate,
    /// Driver gender label as collected by the presentation layer.
    pub owner_gender: Option<String>,
    /// Whether the vehicle is currently inside the lot.
    pub checked_in: bool,
    /// Whether the vehicle has left the lot.
    pub checked_out: bool,
    /// Wall-clock check-in time, canonical format.
    pub checkin_time: String,
    /// Wall-clock check-out time; `None` until check-out.
    pub checkout_time: Option<String>,
    /// Passenger flag label ("Y"/"N") as collected by the presentation layer.
    pub passengers: Option<String>,
}

impl Movement {
    /// Returns true if this is the plate's active movement (inside the
    /// lot, not yet checked out).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.checked_in && !self.checked_out
    }

    /// Returns true if this movement is fully closed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.checked_out && !self.checked_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(checked_in: bool, checked_out: bool) -> Movement {
        Movement {
            id: 1,
            plate: LicensePlate::new("KAA001A").unwrap(),
            owner_gender: Some("Male".into()),
            checked_in,
            checked_out,
            checkin_time: "2024-01-01 09:00:00".into(),
            checkout_time: None,
            passengers: Some("Y".into()),
        }
    }

    #[test]
    fn test_active_movement() {
        let m = movement(true, false);
        assert!(m.is_active());
        assert!(!m.is_completed());
    }

    #[test]
    fn test_completed_movement() {
        let m = movement(false, true);
        assert!(!m.is_active());
        assert!(m.is_completed());
    }
}
