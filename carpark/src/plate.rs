//! License plate type with validation.
//!
//! Plates are the identity of a vehicle throughout the system: movement
//! and reservation rows reference vehicles by plate string, never by row
//! id. The newtype guarantees a plate is non-empty and carries no
//! surrounding whitespace before it reaches the store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a license plate fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPlateError {
    /// The rejected plate value.
    pub value: String,
    /// The reason the plate is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidPlateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid license plate {:?}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidPlateError {}

/// A validated vehicle license plate.
///
/// # Examples
///
/// ```
/// use carpark::LicensePlate;
///
/// let plate = LicensePlate::new("KAA 001A").unwrap();
/// assert_eq!(plate.as_str(), "KAA 001A");
///
/// // Surrounding whitespace is trimmed
/// let plate = LicensePlate::new("  KBB 002B  ").unwrap();
/// assert_eq!(plate.as_str(), "KBB 002B");
///
/// // Empty plates are rejected
/// assert!(LicensePlate::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Creates a new license plate, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the plate is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidPlateError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(InvalidPlateError {
                value,
                reason: "plate must be non-empty after trimming whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the plate as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LicensePlate {
    type Err = InvalidPlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LicensePlate {
    type Error = InvalidPlateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plate_valid() {
        let plate = LicensePlate::new("KAA001A").unwrap();
        assert_eq!(plate.as_str(), "KAA001A");
        assert_eq!(format!("{plate}"), "KAA001A");
    }

    #[test]
    fn test_plate_trims_whitespace() {
        let plate = LicensePlate::new("\tKAA001A \n").unwrap();
        assert_eq!(plate.as_str(), "KAA001A");
    }

    #[test]
    fn test_plate_rejects_empty() {
        assert!(LicensePlate::new("").is_err());
        assert!(LicensePlate::new("   ").is_err());

        let err = LicensePlate::new("  ").unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_plate_from_str() {
        let plate: LicensePlate = "KBC 123D".parse().unwrap();
        assert_eq!(plate.as_str(), "KBC 123D");
    }

    #[test]
    fn test_plate_interior_whitespace_preserved() {
        let plate = LicensePlate::new("KAA 001 A").unwrap();
        assert_eq!(plate.as_str(), "KAA 001 A");
    }

    proptest! {
        // Any non-whitespace string survives the round trip unchanged.
        #[test]
        fn prop_plate_roundtrip(s in "[A-Z0-9]{1,12}") {
            let plate = LicensePlate::new(s.clone()).unwrap();
            prop_assert_eq!(plate.as_str(), s.as_str());
        }

        // Padding never changes the resulting plate.
        #[test]
        fn prop_plate_trim_is_stable(s in "[A-Z0-9]{1,12}", pad in "[ \t]{0,4}") {
            let padded = format!("{pad}{s}{pad}");
            let a = LicensePlate::new(s).unwrap();
            let b = LicensePlate::new(padded).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
