//! Domain Layer
//!
//! Contains the driver entity, its partial-update rules, and the gateway trait (port)
//! to the data access context. This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::driver_repository::DriverRepository;
pub use models::driver::{CreateDriverData, Driver, DriverChanges, DriverId, DriverPatch, NullPolicy};
