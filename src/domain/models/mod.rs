//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod driver;

pub use driver::{
    CreateDriverData, Driver, DriverChange, DriverChanges, DriverId, DriverPatch, FieldPatch, NullPolicy,
};
