//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod driver;

pub use driver::{CreateDriverDto, DriverResponseDto, UpdateDriverDto};
