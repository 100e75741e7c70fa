//! Delete Driver Use Case
//!
//! Removes a driver and hands back the last stored snapshot.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl DeleteDriverUseCase {
    /// Create a new DeleteDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` on a storage error or a commit conflict.
    pub async fn execute(&self, id: DriverId) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Deleting driver");

        let existing = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for deletion");
            not_found(id)
        })?;

        self.driver_repository.remove(&existing).await.inspect_err(|e| {
            tracing::warn!(driver_id = %id, error = %e, "Driver removal failed");
        })?;

        tracing::info!(driver_id = %id, "Driver deleted successfully");
        Ok(existing)
    }
}
