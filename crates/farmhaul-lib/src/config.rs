//! Estimator configuration.
//!
//! # Environment Variables
//!
//! - `FARMHAUL_AVERAGE_SPEED_KMH`: assumed average road speed (default: `40`)
//! - `FARMHAUL_DEFAULT_FUEL_PRICE`: fuel price per liter used when a request
//!   leaves it unset (default: `110`)

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

/// Assumed average road speed in km/h.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// Fuel price per liter applied when the request does not supply one.
pub const DEFAULT_FUEL_PRICE_PER_LITER: f64 = 110.0;

pub const AVERAGE_SPEED_ENV: &str = "FARMHAUL_AVERAGE_SPEED_KMH";
pub const DEFAULT_FUEL_PRICE_ENV: &str = "FARMHAUL_DEFAULT_FUEL_PRICE";

/// Tunables for the transport cost estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    pub average_speed_kmh: f64,
    pub default_fuel_price_per_liter: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            default_fuel_price_per_liter: DEFAULT_FUEL_PRICE_PER_LITER,
        }
    }
}

impl EstimatorConfig {
    /// Create configuration from environment variables.
    ///
    /// Unset variables use the defaults. Values that fail to parse or
    /// validate are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: f64| -> f64 {
            match lookup(key) {
                None => fallback,
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(%key, value = %raw, error = %err, "ignoring unparseable setting");
                        fallback
                    }
                },
            }
        };

        let config = Self {
            average_speed_kmh: read(AVERAGE_SPEED_ENV, defaults.average_speed_kmh),
            default_fuel_price_per_liter: read(
                DEFAULT_FUEL_PRICE_ENV,
                defaults.default_fuel_price_per_liter,
            ),
        };

        match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!(error = %err, "falling back to default estimator configuration");
                defaults
            }
        }
    }

    /// Validate the configuration.
    ///
    /// The average speed divides the distance, so it must be finite and
    /// positive. The default fuel price only needs to be finite.
    pub fn validate(&self) -> Result<()> {
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(Error::InvalidConfig {
                message: format!(
                    "average_speed_kmh must be finite and positive, got {}",
                    self.average_speed_kmh
                ),
            });
        }

        if !self.default_fuel_price_per_liter.is_finite() {
            return Err(Error::InvalidConfig {
                message: format!(
                    "default_fuel_price_per_liter must be finite, got {}",
                    self.default_fuel_price_per_liter
                ),
            });
        }

        Ok(())
    }
}
