use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenient result alias for the farmhaul library.
pub type Result<T> = std::result::Result<T, Error>;

/// Trip fields the estimator refuses to run without.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TripField {
    DistanceKm,
    WeightTons,
    VehicleId,
    FuelPricePerLiter,
}

impl TripField {
    /// Field name as it appears in serialized requests.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripField::DistanceKm => "distanceKm",
            TripField::WeightTons => "weightTons",
            TripField::VehicleId => "vehicleId",
            TripField::FuelPricePerLiter => "fuelPricePerLiter",
        }
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required trip field was empty or unset.
    #[error("missing required field: {field}")]
    MissingField { field: TripField },

    /// A numeric trip field could not be parsed or was not finite.
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: TripField, value: String },

    /// Raised when a vehicle id is not present in the catalog.
    #[error("unknown vehicle id: {id}{}", format_suggestions(.suggestions))]
    UnknownVehicle {
        id: String,
        suggestions: Vec<String>,
    },

    /// Raised when vehicle catalog data fails validation.
    #[error("invalid vehicle data: {message}")]
    VehicleDataValidation { message: String },

    /// Raised when duplicate vehicle ids are encountered during catalog load.
    #[error("duplicate vehicle id encountered: {id}")]
    DuplicateVehicleId { id: String },

    /// Raised when estimator configuration is out of range.
    #[error("invalid estimator configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a vehicle catalog file cannot be opened.
    #[error("vehicle data not found at {path}")]
    VehicleDataNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
