//! Vehicles command handler and catalog resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use farmhaul_lib::VehicleCatalog;

use crate::output::OutputFormat;

/// Environment variable naming a CSV vehicle catalog.
pub const VEHICLE_DATA_ENV: &str = "FARMHAUL_VEHICLE_DATA";

/// Handle the vehicles subcommand.
///
/// Lists the vehicles an estimate can be requested for.
pub fn handle_list_vehicles(vehicle_data: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = load_vehicle_catalog(vehicle_data)?;
    format
        .render_vehicles(&catalog)
        .context("failed to write vehicle list")
}

/// Resolve the vehicle catalog to use.
///
/// Order of precedence:
/// 1. `--vehicle-data` path
/// 2. `FARMHAUL_VEHICLE_DATA` environment variable
/// 3. The built-in catalog
pub fn load_vehicle_catalog(vehicle_data: Option<&Path>) -> Result<Cow<'static, VehicleCatalog>> {
    let path = vehicle_data.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(VEHICLE_DATA_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    match path {
        Some(path) => {
            let catalog = VehicleCatalog::from_path(&path)
                .with_context(|| format!("failed to load vehicle data from {}", path.display()))?;
            Ok(Cow::Owned(catalog))
        }
        None => {
            debug!("using built-in vehicle catalog");
            Ok(Cow::Borrowed(VehicleCatalog::builtin()))
        }
    }
}
