//! Vehicle catalog loading and lookup.
//!
//! The built-in catalog is the fixed four-entry table the calculator ships
//! with. Alternate fleets can be loaded from CSV.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};

use super::profile::VehicleProfile;

static BUILTIN: Lazy<VehicleCatalog> = Lazy::new(|| VehicleCatalog {
    vehicles: vec![
        builtin_vehicle("tractor_trolley", "Tractor Trolley", "ट्रैक्टर ट्रॉली", 8.0, 5.0, 8.0),
        builtin_vehicle("mini_truck", "Mini Truck", "छोटा ट्रक", 12.0, 3.0, 6.0),
        builtin_vehicle("truck", "Truck", "बड़ा ट्रक", 15.0, 10.0, 4.0),
        builtin_vehicle("pickup", "Pickup", "पिकअप", 10.0, 1.5, 10.0),
    ],
    source: None,
});

fn builtin_vehicle(
    id: &str,
    display_name: &str,
    local_name: &str,
    rate_per_km: f64,
    capacity_tons: f64,
    fuel_efficiency_km_per_liter: f64,
) -> VehicleProfile {
    VehicleProfile {
        id: id.to_string(),
        display_name: display_name.to_string(),
        local_name: Some(local_name.to_string()),
        rate_per_km,
        capacity_tons,
        fuel_efficiency_km_per_liter,
    }
}

/// Ordered collection of vehicle profiles keyed by id.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: Vec<VehicleProfile>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// The compiled-in catalog: tractor trolley, mini truck, truck, pickup.
    pub fn builtin() -> &'static VehicleCatalog {
        &BUILTIN
    }

    /// Load a vehicle catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::VehicleDataNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            vehicles = catalog.len(),
            "loaded vehicle catalog"
        );
        Ok(catalog)
    }

    /// Load a vehicle catalog from CSV (file or in-memory buffer).
    ///
    /// Required columns are `id`, `display_name`, `rate_per_km`,
    /// `capacity_tons` and `fuel_efficiency_km_per_liter`; `local_name` is
    /// optional. Common header spellings such as `rate`, `capacity` and
    /// `mileage` are accepted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::VehicleDataValidation {
                message: format!("failed to read vehicle data headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("id", &["id", "vehicle_id", "vehicle_type", "key"]),
            ("display_name", &["display_name", "displayname", "name"]),
            ("local_name", &["local_name", "localname", "hindi_name"]),
            ("rate_per_km", &["rate_per_km", "ratekm", "rate"]),
            (
                "capacity_tons",
                &["capacity_tons", "capacity_t", "capacity"],
            ),
            (
                "fuel_efficiency_km_per_liter",
                &[
                    "fuel_efficiency_km_per_liter",
                    "fuel_efficiency",
                    "km_per_liter",
                    "mileage",
                ],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            if let Some(i) = alts.iter().find_map(|alt| {
                let alt_n = normalize_header(alt);
                normalized_headers.iter().position(|h| h == &alt_n)
            }) {
                index_map.insert(*canon, i);
            }
        }

        let required = [
            "id",
            "display_name",
            "rate_per_km",
            "capacity_tons",
            "fuel_efficiency_km_per_liter",
        ];
        let missing: Vec<&str> = required
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();

        if !missing.is_empty() {
            return Err(Error::VehicleDataValidation {
                message: format!(
                    "vehicle data missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut vehicles: Vec<VehicleProfile> = Vec::new();

        // header is line 1
        for (offset, result) in csv_reader.records().enumerate() {
            let row = offset + 2;
            let record = result.map_err(|e| Error::VehicleDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
            };

            let id = get("id").unwrap_or_default();
            let number = |field: &str| -> Result<f64> {
                let raw = get(field).ok_or_else(|| Error::VehicleDataValidation {
                    message: format!("missing {field} for vehicle '{id}' at row {row}"),
                })?;
                raw.parse::<f64>()
                    .map_err(|e| Error::VehicleDataValidation {
                        message: format!("invalid {field} for vehicle '{id}' at row {row}: {e}"),
                    })
            };

            let vehicle = VehicleProfile {
                id: id.clone(),
                display_name: get("display_name").unwrap_or_default(),
                local_name: get("local_name").filter(|s| !s.is_empty()),
                rate_per_km: number("rate_per_km")?,
                capacity_tons: number("capacity_tons")?,
                fuel_efficiency_km_per_liter: number("fuel_efficiency_km_per_liter")?,
            };

            vehicle.validate()?;

            let key = normalize_id(&vehicle.id);
            if vehicles.iter().any(|v| normalize_id(&v.id) == key) {
                return Err(Error::DuplicateVehicleId { id: key });
            }
            vehicles.push(vehicle);
        }

        Ok(Self {
            vehicles,
            source: None,
        })
    }

    /// Get a vehicle by id (case-insensitive).
    pub fn get(&self, id: &str) -> Option<&VehicleProfile> {
        let key = normalize_id(id);
        self.vehicles.iter().find(|v| normalize_id(&v.id) == key)
    }

    /// Resolve a vehicle id, returning `UnknownVehicle` with suggestions on a miss.
    pub fn resolve(&self, id: &str) -> Result<&VehicleProfile> {
        self.get(id).ok_or_else(|| Error::UnknownVehicle {
            id: id.to_string(),
            suggestions: self.suggest(id, 3),
        })
    }

    /// Vehicles in catalog order.
    pub fn vehicles(&self) -> &[VehicleProfile] {
        &self.vehicles
    }

    /// Vehicle ids in catalog order.
    pub fn ids(&self) -> Vec<&str> {
        self.vehicles.iter().map(|v| v.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Closest vehicle ids to `id`, best match first.
    pub fn suggest(&self, id: &str, limit: usize) -> Vec<String> {
        let needle = normalize_id(id);
        let mut scored: Vec<(f64, &str)> = self
            .vehicles
            .iter()
            .map(|v| (strsim::jaro_winkler(&needle, &normalize_id(&v.id)), v.id.as_str()))
            .filter(|(score, _)| *score >= 0.7)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.to_string())
            .collect()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Normalize a vehicle id for case-insensitive lookup.
fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}
