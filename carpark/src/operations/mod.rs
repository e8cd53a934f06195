//! Lifecycle operations for the parking lot.
//!
//! Each operation runs inside a single IMMEDIATE transaction so its
//! read-check-write sequence is atomic with respect to other writers.
//! Business outcomes (already checked in, not currently inside, already
//! reserved) are values, not errors; errors are reserved for store
//! failures, invalid input, and slot problems.

pub mod cancel;
pub mod check_in;
pub mod check_out;
pub mod reserve;

pub use cancel::{execute_cancel_reservation, CancelOptions, CancelOutcome};
pub use check_in::{execute_check_in, CheckInOptions, CheckInOutcome};
pub use check_out::{execute_check_out, CheckOutOptions, CheckOutOutcome};
pub use reserve::{execute_reserve, ReserveOptions, ReserveOutcome};
