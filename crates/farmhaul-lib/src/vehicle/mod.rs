//! Vehicle profiles and the catalog they are selected from.
//!
//! - [`profile`] - Rate, capacity and fuel efficiency of one vehicle class
//! - [`catalog`] - The built-in table and CSV loading for alternate fleets
//!
//! # Example
//!
//! ```
//! use farmhaul_lib::vehicle::VehicleCatalog;
//!
//! let truck = VehicleCatalog::builtin().get("truck").unwrap();
//! assert_eq!(truck.capacity_tons, 10.0);
//! ```

pub mod catalog;
pub mod profile;

pub use catalog::VehicleCatalog;
pub use profile::VehicleProfile;
