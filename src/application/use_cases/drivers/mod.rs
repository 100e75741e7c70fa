//! Driver Use Cases
//!
//! List, get, create, update and delete over the drivers resource.

mod create_driver;
mod delete_driver;
mod get_driver_by_id;
mod list_drivers;
mod update_driver;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use get_driver_by_id::GetDriverByIdUseCase;
pub use list_drivers::ListDriversUseCase;
pub use update_driver::UpdateDriverUseCase;

use crate::domain::models::driver::DriverId;
use crate::shared::errors::UseCaseError;

pub(crate) fn not_found(id: DriverId) -> UseCaseError {
    UseCaseError::NotFound {
        resource: "Driver".to_string(),
        id: id.to_string(),
    }
}
