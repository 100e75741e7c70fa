//! Get Driver By ID Use Case
//!
//! Retrieves a single driver by its national identification number.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a driver by ID
pub struct GetDriverByIdUseCase {
    driver_repository: Arc<dyn DriverRepository>,
}

impl GetDriverByIdUseCase {
    /// Create a new GetDriverByIdUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>) -> Self {
        Self { driver_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a storage error.
    pub async fn execute(&self, id: DriverId) -> Result<Driver, UseCaseError> {
        tracing::debug!(driver_id = %id, "Getting driver by ID");

        let driver = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found");
            not_found(id)
        })?;

        Ok(driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::drivers::test_support::{create_test_driver, storage_error};
    use crate::domain::gateways::driver_repository::MockDriverRepository;
    use crate::infrastructure::driven_adapters::driver_repository::InMemoryDriverRepository;

    #[tokio::test]
    async fn should_return_driver_when_found() {
        let driver = create_test_driver(99_123_100_000, "Jan");
        let repo = Arc::new(InMemoryDriverRepository::new());
        repo.add(&driver).await.unwrap();

        let use_case = GetDriverByIdUseCase::new(repo);
        let result = use_case.execute(driver.id()).await;

        assert_eq!(result.unwrap(), driver);
    }

    #[tokio::test]
    async fn should_return_not_found_when_driver_does_not_exist() {
        let use_case = GetDriverByIdUseCase::new(Arc::new(InMemoryDriverRepository::new()));
        let result = use_case.execute(DriverId::new(1)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_propagate_storage_error() {
        let mut repo = MockDriverRepository::new();
        repo.expect_find_by_id().returning(|_| Err(storage_error()));

        let use_case = GetDriverByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute(DriverId::new(1)).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::Repository(_)));
    }
}
