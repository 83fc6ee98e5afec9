//! Transport cost estimation.
//!
//! Every trip is costed as a round trip: the vehicle burns fuel for twice the
//! one-way distance, while the per-kilometre base rate is charged on the
//! one-way distance only. Cargo heavier than one vehicle's capacity needs
//! several full dispatches, each billed at the full per-trip cost.
//!
//! Fuel and base cost are rounded independently for display. The total is
//! rounded once from the unrounded parts, so the breakdown may not add up to
//! the total exactly.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EstimatorConfig;
use crate::error::{Error, Result, TripField};
use crate::vehicle::{VehicleCatalog, VehicleProfile};

/// Inputs for one calculation.
///
/// Required fields are optional here so an unset field can be reported as
/// [`Error::MissingField`] rather than silently defaulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub distance_km: Option<f64>,
    pub weight_tons: Option<f64>,
    pub vehicle_id: Option<String>,
    /// Falls back to [`EstimatorConfig::default_fuel_price_per_liter`].
    pub fuel_price_per_liter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
}

impl TripRequest {
    /// Request with all required fields set and the default fuel price.
    pub fn new(distance_km: f64, weight_tons: f64, vehicle_id: impl Into<String>) -> Self {
        Self {
            distance_km: Some(distance_km),
            weight_tons: Some(weight_tons),
            vehicle_id: Some(vehicle_id.into()),
            ..Self::default()
        }
    }

    pub fn with_fuel_price(mut self, fuel_price_per_liter: f64) -> Self {
        self.fuel_price_per_liter = Some(fuel_price_per_liter);
        self
    }

    pub fn with_route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from_location = Some(from.into());
        self.to_location = Some(to.into());
        self
    }
}

/// Result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripEstimate {
    pub total_cost: i64,
    pub fuel_cost: i64,
    pub base_cost: i64,
    pub estimated_hours: f64,
    /// `estimated_hours` with one decimal, ties away from zero (`1.25` -> `"1.3"`).
    pub estimated_hours_display: String,
    pub trips_required: i64,
    pub fuel_price_per_liter: f64,
    pub vehicle: VehicleProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_location: Option<String>,
}

/// Computes [`TripEstimate`]s against a vehicle catalog.
#[derive(Debug, Clone)]
pub struct Estimator<'a> {
    catalog: &'a VehicleCatalog,
    config: EstimatorConfig,
}

impl Default for Estimator<'static> {
    fn default() -> Self {
        Self::new(VehicleCatalog::builtin(), EstimatorConfig::default())
    }
}

impl<'a> Estimator<'a> {
    pub fn new(catalog: &'a VehicleCatalog, config: EstimatorConfig) -> Self {
        Self { catalog, config }
    }

    /// Estimate the cost and duration of moving the requested cargo.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if distance, weight or vehicle is unset
    ///   (a blank vehicle id counts as unset); checked before any value
    /// - [`Error::InvalidNumber`] if a numeric field is NaN or infinite
    /// - [`Error::UnknownVehicle`] if the vehicle id is not in the catalog
    /// - [`Error::InvalidConfig`] if the estimator configuration is invalid
    ///
    /// Zero and negative magnitudes are accepted and produce a numeric
    /// result; they are only logged.
    pub fn estimate(&self, request: &TripRequest) -> Result<TripEstimate> {
        self.config.validate()?;

        let distance_km = request.distance_km.ok_or(Error::MissingField {
            field: TripField::DistanceKm,
        })?;
        let weight_tons = request.weight_tons.ok_or(Error::MissingField {
            field: TripField::WeightTons,
        })?;
        let vehicle_id = request
            .vehicle_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(Error::MissingField {
                field: TripField::VehicleId,
            })?;

        let distance_km = ensure_finite(distance_km, TripField::DistanceKm)?;
        let weight_tons = ensure_finite(weight_tons, TripField::WeightTons)?;
        let fuel_price = match request.fuel_price_per_liter {
            Some(price) => ensure_finite(price, TripField::FuelPricePerLiter)?,
            None => self.config.default_fuel_price_per_liter,
        };

        let vehicle = self.catalog.resolve(vehicle_id)?;

        warn_if_not_positive(distance_km, TripField::DistanceKm);
        warn_if_not_positive(weight_tons, TripField::WeightTons);
        warn_if_not_positive(fuel_price, TripField::FuelPricePerLiter);

        let fuel_cost = (distance_km * 2.0 / vehicle.fuel_efficiency_km_per_liter) * fuel_price;
        let base_cost = distance_km * vehicle.rate_per_km;
        let trips_required = (weight_tons / vehicle.capacity_tons).ceil();
        let total_cost = (base_cost + fuel_cost) * trips_required;
        let estimated_hours = distance_km / self.config.average_speed_kmh;

        let estimate = TripEstimate {
            total_cost: whole_amount(total_cost, "total_cost"),
            fuel_cost: whole_amount(fuel_cost, "fuel_cost"),
            base_cost: whole_amount(base_cost, "base_cost"),
            estimated_hours,
            estimated_hours_display: format_one_decimal(estimated_hours),
            trips_required: whole_amount(trips_required, "trips_required"),
            fuel_price_per_liter: fuel_price,
            vehicle: vehicle.clone(),
            from_location: request.from_location.clone(),
            to_location: request.to_location.clone(),
        };

        debug!(
            vehicle = %estimate.vehicle.id,
            total_cost = estimate.total_cost,
            trips = estimate.trips_required,
            "computed transport estimate"
        );

        Ok(estimate)
    }
}

/// Estimate against the built-in catalog with the default configuration.
pub fn estimate(request: &TripRequest) -> Result<TripEstimate> {
    Estimator::default().estimate(request)
}

fn ensure_finite(value: f64, field: TripField) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

fn warn_if_not_positive(value: f64, field: TripField) {
    if value <= 0.0 {
        warn!(%field, value, "non-positive input accepted; estimate may be meaningless");
    }
}

/// Round for display and convert, saturating at the `i64` bounds.
fn whole_amount(value: f64, name: &'static str) -> i64 {
    let rounded = round_half_up(value);
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        warn!(field = name, value, "result out of range; clamped to i64 bounds");
    }
    rounded as i64
}

/// Round to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format with one decimal place, ties away from zero.
///
/// `{:.1}` rounds exact ties to even (`1.25` -> `"1.2"`); the calculator has
/// always shown `"1.3"` there.
pub(crate) fn format_one_decimal(value: f64) -> String {
    let magnitude = value.abs();
    let scaled = magnitude * 10.0;
    let exact = magnitude.mul_add(10.0, -scaled) == 0.0;
    if exact && scaled - scaled.floor() == 0.5 {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{sign}{:.1}", (scaled.floor() + 1.0) / 10.0)
    } else {
        format!("{:.1}", value)
    }
}
