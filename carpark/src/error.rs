//! Error types for the carpark library.
//!
//! This module provides the error hierarchy for all operations in the
//! carpark library, using `thiserror` for ergonomic error handling.
//!
//! Business-rule refusals ("already checked in", "already reserved") are
//! NOT errors; they are outcome values returned by the lifecycle
//! operations. The variants here cover store failures, bad input, and
//! internal-consistency problems.

use thiserror::Error;

use crate::slot::SlotNumber;

/// Result type alias for operations that may fail with a carpark error.
///
/// # Examples
///
/// ```
/// use carpark::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the carpark library.
///
/// A `Database` error always means the store itself failed; it is never
/// used for "no rows found", which every query reports as `Ok(None)` or an
/// empty collection.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid license plate was provided.
    #[error("invalid license plate {value:?}: {reason}")]
    InvalidPlate {
        /// The invalid plate value.
        value: String,
        /// The reason the plate is invalid.
        reason: String,
    },

    /// An invalid slot number was provided.
    #[error("invalid slot number {value}: {reason}")]
    InvalidSlot {
        /// The invalid slot value.
        value: i64,
        /// The reason the slot number is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested slot is not part of the provisioned slot set.
    #[error("slot {slot} does not exist")]
    UnknownSlot {
        /// The slot number that was requested.
        slot: SlotNumber,
    },

    /// The requested slot is already occupied by another reservation.
    #[error("slot {slot} is already occupied")]
    SlotOccupied {
        /// The slot number that was requested.
        slot: SlotNumber,
    },

    /// The store violates an internal invariant and needs operator
    /// attention (for example, two simultaneously active movement rows
    /// for one plate).
    #[error("invariant violation: {details}")]
    InvariantViolation {
        /// Details about the violated invariant.
        details: String,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::plate::InvalidPlateError> for Error {
    fn from(err: crate::plate::InvalidPlateError) -> Self {
        Self::InvalidPlate {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::slot::InvalidSlotError> for Error {
    fn from(err: crate::slot::InvalidSlotError) -> Self {
        Self::InvalidSlot {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error indicates a slot that cannot accept a reservation
    /// (unknown or occupied).
    ///
    /// # Examples
    ///
    /// ```
    /// use carpark::{Error, SlotNumber};
    ///
    /// let err = Error::SlotOccupied { slot: SlotNumber::try_from(3).unwrap() };
    /// assert!(err.is_slot_unavailable());
    /// ```
    #[must_use]
    pub fn is_slot_unavailable(&self) -> bool {
        matches!(self, Self::UnknownSlot { .. } | Self::SlotOccupied { .. })
    }

    /// Check if error indicates an internal-consistency problem.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }

    /// Check if error indicates the database was still locked when the
    /// busy timeout elapsed.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(e) if e.sqlite_error_code() == Some(rusqlite::ErrorCode::DatabaseBusy)
        )
    }
}
