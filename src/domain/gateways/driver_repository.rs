//! Driver Repository Gateway
//!
//! Abstract trait defining the data access context for the `drivers` table.

use async_trait::async_trait;

use crate::domain::models::driver::{Driver, DriverChanges, DriverId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Cheap reachability check against the drivers table
    async fn probe(&self) -> Result<(), RepositoryError>;

    /// Find a driver by its ID
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Find all drivers, sorted by id ascending
    async fn find_all_ordered(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Insert a new driver and commit
    async fn add(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Commit only the staged column changes of one driver
    ///
    /// Fails with `RepositoryError::Concurrency` when the row is gone or the
    /// write lost a serialization race.
    async fn save_changes(&self, id: DriverId, changes: &DriverChanges) -> Result<(), RepositoryError>;

    /// Delete a driver and commit
    ///
    /// Fails with `RepositoryError::Concurrency` when the row is already gone.
    async fn remove(&self, driver: &Driver) -> Result<(), RepositoryError>;
}
