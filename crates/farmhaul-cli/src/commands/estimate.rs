//! Estimate command handler for transport cost calculations.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use farmhaul_lib::{Error as EstimateError, Estimator, EstimatorConfig, TripField, TripRequest};

use crate::commands::vehicles::load_vehicle_catalog;
use crate::output::OutputFormat;

/// Message shown when a required field is left empty.
pub const MISSING_DETAILS_MESSAGE: &str = "Please fill in all details";

/// Arguments for the estimate command.
#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// One-way distance in kilometres.
    #[arg(long, allow_negative_numbers = true)]
    pub distance: Option<f64>,
    /// Cargo weight in tons.
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,
    /// Vehicle id (see the `vehicles` command).
    #[arg(long)]
    pub vehicle: Option<String>,
    /// Diesel price per liter; defaults to FARMHAUL_DEFAULT_FUEL_PRICE or 110.
    #[arg(long, allow_negative_numbers = true)]
    pub fuel_price: Option<f64>,
    /// Starting location label.
    #[arg(long = "from")]
    pub from: Option<String>,
    /// Destination label.
    #[arg(long = "to")]
    pub to: Option<String>,
}

impl EstimateArgs {
    /// Convert CLI args to a library TripRequest.
    pub fn to_request(&self) -> TripRequest {
        TripRequest {
            distance_km: self.distance,
            weight_tons: self.weight,
            vehicle_id: self.vehicle.clone(),
            fuel_price_per_liter: self.fuel_price,
            from_location: self.from.clone(),
            to_location: self.to.clone(),
        }
    }
}

/// Handle the estimate subcommand.
pub fn handle_estimate_command(
    vehicle_data: Option<&Path>,
    format: OutputFormat,
    args: &EstimateArgs,
) -> Result<()> {
    let catalog = load_vehicle_catalog(vehicle_data)?;
    let estimator = Estimator::new(&catalog, EstimatorConfig::from_env());

    let estimate = match estimator.estimate(&args.to_request()) {
        Ok(estimate) => estimate,
        Err(err) => return Err(handle_estimate_failure(err)),
    };

    format
        .render_estimate(&estimate)
        .context("failed to write estimate")
}

fn handle_estimate_failure(err: EstimateError) -> anyhow::Error {
    match err {
        EstimateError::MissingField { field } => {
            anyhow::anyhow!("{MISSING_DETAILS_MESSAGE} (missing --{})", flag_for(field))
        }
        other => anyhow::Error::new(other),
    }
}

fn flag_for(field: TripField) -> &'static str {
    match field {
        TripField::DistanceKm => "distance",
        TripField::WeightTons => "weight",
        TripField::VehicleId => "vehicle",
        TripField::FuelPricePerLiter => "fuel-price",
    }
}
