//! farmhaul library entry points.
//!
//! This crate holds the transport cost model used by the farmer services
//! calculator: the vehicle catalog, the estimator, and the adapter from raw
//! form text to a trip request. Front ends (the CLI) should only depend on
//! the functions exported here instead of reimplementing the formulas.
//!

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod estimate;
pub mod form;
pub mod vehicle;

pub use config::EstimatorConfig;
pub use error::{Error, Result, TripField};
pub use estimate::{estimate, Estimator, TripEstimate, TripRequest};
pub use form::TripForm;
pub use vehicle::{VehicleCatalog, VehicleProfile};
