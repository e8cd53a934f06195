//! Parking slot types.
//!
//! Slots are a fixed, pre-provisioned set of numbered spaces seeded when
//! the database is first created. At runtime a slot only ever changes
//! status between `available` and `occupied`; slots are never created or
//! destroyed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a slot number fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotError {
    /// The rejected slot value.
    pub value: i64,
    /// The reason the slot number is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid slot number {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSlotError {}

/// A validated parking slot number.
///
/// Slot numbers start at 1; the provisioned set is `1..=slot_count` where
/// `slot_count` is fixed at database initialization.
///
/// # Examples
///
/// ```
/// use carpark::SlotNumber;
///
/// let slot = SlotNumber::try_from(4).unwrap();
/// assert_eq!(slot.value(), 4);
///
/// assert!(SlotNumber::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotNumber(u32);

impl SlotNumber {
    /// Returns the numeric slot value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for SlotNumber {
    type Error = InvalidSlotError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(InvalidSlotError {
                value,
                reason: "slot numbers start at 1".into(),
            });
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| InvalidSlotError {
                value,
                reason: "slot number out of range".into(),
            })
    }
}

impl fmt::Display for SlotNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability status of a parking slot.
///
/// Stored as the TEXT values `available` / `occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// The slot can accept a new reservation.
    Available,
    /// The slot is held by an active reservation.
    Occupied,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Occupied => write!(f, "occupied"),
        }
    }
}

impl FromStr for SlotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            _ => Err(format!("unrecognized slot status: {s}")),
        }
    }
}

/// A parking slot together with its current status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The slot number.
    pub number: SlotNumber,
    /// The slot's current availability.
    pub status: SlotStatus,
}
