//! In-Memory Driver Repository Implementation
//!
//! Keeps drivers in an ordered map. Used for local runs without PostgreSQL and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverChanges, DriverId};
use crate::shared::errors::RepositoryError;

/// In-memory implementation of DriverRepository
#[derive(Default)]
pub struct InMemoryDriverRepository {
    drivers: RwLock<BTreeMap<DriverId, Driver>>,
}

impl InMemoryDriverRepository {
    /// Create an empty InMemoryDriverRepository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DriverRepository for InMemoryDriverRepository {
    async fn probe(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError> {
        Ok(self.drivers.read().await.get(&id).cloned())
    }

    async fn find_all_ordered(&self) -> Result<Vec<Driver>, RepositoryError> {
        Ok(self.drivers.read().await.values().cloned().collect())
    }

    async fn add(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let mut drivers = self.drivers.write().await;
        if drivers.contains_key(&driver.id()) {
            return Err(RepositoryError::Storage {
                message: format!("duplicate key value violates unique constraint: id={}", driver.id()),
                code: Some("23505".to_string()),
            });
        }
        drivers.insert(driver.id(), driver.clone());
        Ok(driver.clone())
    }

    async fn save_changes(&self, id: DriverId, changes: &DriverChanges) -> Result<(), RepositoryError> {
        let mut drivers = self.drivers.write().await;
        let current = drivers
            .remove(&id)
            .ok_or_else(|| RepositoryError::Concurrency(format!("driver {id} no longer exists")))?;
        drivers.insert(id, current.with_changes(changes));
        Ok(())
    }

    async fn remove(&self, driver: &Driver) -> Result<(), RepositoryError> {
        self.drivers
            .write()
            .await
            .remove(&driver.id())
            .map(|_| ())
            .ok_or_else(|| RepositoryError::Concurrency(format!("driver {} no longer exists", driver.id())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::driver::{CreateDriverData, DriverPatch, FieldPatch, NullPolicy};

    fn driver(id: i64) -> Driver {
        Driver::new(CreateDriverData {
            id,
            name: Some("Jan".to_string()),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn save_changes_on_missing_row_is_a_conflict() {
        let repo = InMemoryDriverRepository::new();
        let existing = driver(1);
        let changes = existing.diff(
            &DriverPatch {
                name: FieldPatch::Value("Janusz".to_string()),
                ..Default::default()
            },
            NullPolicy::Ignore,
        );

        let result = repo.save_changes(existing.id(), &changes).await;
        assert!(matches!(result, Err(RepositoryError::Concurrency(_))));
    }

    #[tokio::test]
    async fn remove_twice_is_a_conflict() {
        let repo = InMemoryDriverRepository::new();
        let existing = repo.add(&driver(1)).await.unwrap();

        assert!(repo.remove(&existing).await.is_ok());
        assert!(matches!(
            repo.remove(&existing).await,
            Err(RepositoryError::Concurrency(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_add_reports_unique_violation_code() {
        let repo = InMemoryDriverRepository::new();
        repo.add(&driver(1)).await.unwrap();

        match repo.add(&driver(1)).await {
            Err(RepositoryError::Storage { code, .. }) => assert_eq!(code.as_deref(), Some("23505")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
