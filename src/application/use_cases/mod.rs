//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod drivers;

pub use drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase, UpdateDriverUseCase,
};
