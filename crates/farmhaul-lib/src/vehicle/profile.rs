//! Vehicle profile attributes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Rate, capacity, and fuel characteristics of one vehicle class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub id: String,
    pub display_name: String,
    /// Hindi label shown by the farmer-facing screens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    /// Currency units charged per kilometre of one-way distance.
    pub rate_per_km: f64,
    pub capacity_tons: f64,
    pub fuel_efficiency_km_per_liter: f64,
}

impl VehicleProfile {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: "vehicle id must not be empty".to_string(),
            });
        }
        if self.display_name.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: format!("display_name for vehicle '{}' must not be empty", self.id),
            });
        }

        let fields = [
            (self.rate_per_km, "rate_per_km"),
            (self.capacity_tons, "capacity_tons"),
            (
                self.fuel_efficiency_km_per_liter,
                "fuel_efficiency_km_per_liter",
            ),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!(
                        "{field} for vehicle '{}' must be a finite positive number",
                        self.id
                    ),
                });
            }
        }

        Ok(())
    }

    /// Label used in selection lists, e.g. `Pickup (up to 1.5T)`.
    pub fn capacity_label(&self) -> String {
        format!("{} (up to {}T)", self.display_name, self.capacity_tons)
    }
}
