//! Create Driver Use Case
//!
//! Registers a new driver under a client-supplied identification number.

use std::sync::Arc;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::shared::errors::UseCaseError;

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the probe or insert fails, including
    /// when the id is already taken, or if the commit hits a concurrency conflict.
    pub async fn execute(&self, data: CreateDriverData) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = data.id, "Creating new driver");

        self.driver_repository.probe().await?;

        let driver = Driver::new(data);
        let created = self.driver_repository.add(&driver).await?;

        tracing::info!(driver_id = %created.id(), "Driver created successfully");
        Ok(created)
    }
}
