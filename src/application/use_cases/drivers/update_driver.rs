//! Update Driver Use Case
//!
//! Applies a partial update: only fields that were sent and differ from the
//! stored row are written. The id is never changed.

use std::sync::Arc;

use super::not_found;
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId, DriverPatch, NullPolicy};
use crate::shared::errors::{RepositoryError, UseCaseError};

/// Use case for partially updating a driver
pub struct UpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    null_policy: NullPolicy,
}

impl UpdateDriverUseCase {
    /// Create a new UpdateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>, null_policy: NullPolicy) -> Self {
        Self {
            driver_repository,
            null_policy,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Repository` on a storage error, or with
    /// `RepositoryError::Concurrency` if the row changed underneath the commit.
    pub async fn execute(&self, id: DriverId, patch: DriverPatch) -> Result<Driver, UseCaseError> {
        tracing::info!(driver_id = %id, "Updating driver");

        let existing = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for update");
            not_found(id)
        })?;

        let changes = existing.diff(&patch, self.null_policy);
        if changes.is_empty() {
            tracing::debug!(driver_id = %id, "No field changes to commit");
            return Ok(existing);
        }

        tracing::debug!(driver_id = %id, changed_fields = ?changes.columns(), "Committing staged changes");
        self.driver_repository.save_changes(id, &changes).await?;

        // Re-read so the caller sees what storage actually holds
        let updated = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver vanished right after update");
            RepositoryError::Concurrency(format!("driver {id} was removed during update"))
        })?;

        tracing::info!(driver_id = %id, changed = changes.len(), "Driver updated successfully");
        Ok(updated)
    }
}
