//! Raw text form input for the transport calculator.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_FUEL_PRICE_PER_LITER;
use crate::error::{Error, Result, TripField};
use crate::estimate::TripRequest;

/// Form fields exactly as typed, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripForm {
    pub from_location: String,
    pub to_location: String,
    pub distance: String,
    pub weight: String,
    pub vehicle_type: String,
    pub fuel_price: String,
}

impl Default for TripForm {
    fn default() -> Self {
        Self {
            from_location: String::new(),
            to_location: String::new(),
            distance: String::new(),
            weight: String::new(),
            vehicle_type: String::new(),
            fuel_price: DEFAULT_FUEL_PRICE_PER_LITER.to_string(),
        }
    }
}

impl TripForm {
    /// Parse the form into a [`TripRequest`].
    ///
    /// A blank distance, weight or vehicle is reported as
    /// [`Error::MissingField`] before any text is parsed. Otherwise, text
    /// that is not a finite number is rejected with [`Error::InvalidNumber`].
    /// A blank fuel price stays unset and the estimator's default applies.
    pub fn to_request(&self) -> Result<TripRequest> {
        let required = [
            (&self.distance, TripField::DistanceKm),
            (&self.weight, TripField::WeightTons),
            (&self.vehicle_type, TripField::VehicleId),
        ];
        if let Some((_, field)) = required.iter().find(|(raw, _)| raw.trim().is_empty()) {
            return Err(Error::MissingField { field: *field });
        }

        Ok(TripRequest {
            distance_km: parse_number(&self.distance, TripField::DistanceKm)?,
            weight_tons: parse_number(&self.weight, TripField::WeightTons)?,
            vehicle_id: non_blank(&self.vehicle_type),
            fuel_price_per_liter: parse_number(&self.fuel_price, TripField::FuelPricePerLiter)?,
            from_location: non_blank(&self.from_location),
            to_location: non_blank(&self.to_location),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(raw: &str, field: TripField) -> Result<Option<f64>> {
    let Some(text) = non_blank(raw) else {
        return Ok(None);
    };
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(Error::InvalidNumber { field, value: text }),
    }
}
