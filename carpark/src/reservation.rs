//! Reservation records for the slot reservation lifecycle.
//!
//! A reservation is created `active` and mutated at most once, to
//! `cancelled`. Cancellation is terminal for a row; a plate re-enters
//! the active state only through a brand-new reservation row. Rows are
//! never deleted.
//!
//! Invariant: a plate has at most one row with status `active` at any
//! time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::plate::LicensePlate;
use crate::slot::SlotNumber;

/// Status of a reservation row.
///
/// Stored as the TEXT values `active` / `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// The reservation currently holds its slot.
    Active,
    /// The reservation has been cancelled (terminal).
    Cancelled,
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("unrecognized reservation status: {s}")),
        }
    }
}

/// A slot reservation for a plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Row id in the store.
    pub id: i64,
    /// The plate that holds the reservation.
    pub plate: LicensePlate,
    /// User-chosen start bound, canonical wall-clock format.
    pub reservation_start: String,
    /// User-chosen end bound, canonical wall-clock format.
    pub reservation_end: String,
    /// The reserved slot.
    pub slot_number: SlotNumber,
    /// Wall-clock time the reservation was recorded.
    pub reserved_on: String,
    /// Current status of this row.
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns true if this reservation still holds its slot.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, ReservationStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_and_parse() {
        assert_eq!(format!("{}", ReservationStatus::Active), "active");
        assert_eq!(format!("{}", ReservationStatus::Cancelled), "cancelled");

        assert_eq!(
            "active".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Active
        );
        assert_eq!(
            "cancelled".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert!("pending".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_is_active() {
        let mut reservation = Reservation {
            id: 1,
            plate: LicensePlate::new("KAA001A").unwrap(),
            reservation_start: "2024-01-01 09:00:00".into(),
            reservation_end: "2024-01-01 17:00:00".into(),
            slot_number: SlotNumber::try_from(4).unwrap(),
            reserved_on: "2024-01-01 08:45:00".into(),
            status: ReservationStatus::Active,
        };
        assert!(reservation.is_active());

        reservation.status = ReservationStatus::Cancelled;
        assert!(!reservation.is_active());
    }
}
