//! List Drivers Use Case
//!
//! Retrieves all drivers, sorted by id.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::Driver;
use crate::shared::errors::UseCaseError;

/// Use case for listing every driver
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl ListDriversUseCase {
    /// Create a new ListDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// The table is probed first so connectivity problems surface before the real query.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(&self) -> Result<Vec<Driver>, UseCaseError> {
        tracing::debug!("Listing all drivers");

        self.driver_repository.probe().await?;
        let drivers = self.driver_repository.find_all_ordered().await?;

        tracing::debug!(count = drivers.len(), "Found drivers");
        Ok(drivers)
    }
}
