//! Vehicle records and the brand/model reference data.

use serde::{Deserialize, Serialize};

use crate::plate::LicensePlate;

/// A registered vehicle.
///
/// Vehicles are created on first check-in and never deleted by the
/// normal flow. Movement and reservation rows reference vehicles by
/// plate string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Row id in the store.
    pub id: i64,
    /// The unique license plate.
    pub plate: LicensePlate,
    /// Free-form vehicle type label (usually a brand/model pair).
    pub vehicle_type: String,
}

/// A brand/model pair from the reference table.
///
/// The reference table is seeded once at database initialization and
/// backs the vehicle-type choices offered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    /// Manufacturer name.
    pub brand: String,
    /// Model name.
    pub model: String,
}

impl VehicleModel {
    /// Formats the pair as the label used for vehicle types, e.g.
    /// `"Toyota Corolla"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_model_label() {
        let model = VehicleModel {
            brand: "Toyota".into(),
            model: "Corolla".into(),
        };
        assert_eq!(model.label(), "Toyota Corolla");
    }
}
