//! Application Layer
//!
//! Contains the use cases that together make up the driver resource service.
//! Use cases depend on domain gateways (abstractions), not concrete implementations.

pub mod use_cases;
