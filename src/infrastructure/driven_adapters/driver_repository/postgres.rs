//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverChange, DriverChanges, DriverId};
use crate::shared::errors::RepositoryError;

/// Database row representation for drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: i64,
    name: Option<String>,
    surname: Option<String>,
    birth_date: Option<NaiveDate>,
    phone_number: Option<String>,
    email: Option<String>,
    licence_number: Option<String>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(
            DriverId::new(row.id),
            row.name,
            row.surname,
            row.birth_date,
            row.phone_number,
            row.email,
            row.licence_number,
        )
    }
}

/// Appends `column = $n` for one staged change
fn push_assignment(builder: &mut QueryBuilder<'static, Postgres>, change: &DriverChange) {
    builder.push(change.column()).push(" = ");
    match change {
        DriverChange::Name(v)
        | DriverChange::Surname(v)
        | DriverChange::PhoneNumber(v)
        | DriverChange::Email(v)
        | DriverChange::LicenceNumber(v) => builder.push_bind(v.clone()),
        DriverChange::BirthDate(v) => builder.push_bind(*v),
    };
}

/// Builds `UPDATE drivers SET <changed columns> WHERE id = $n`
fn build_update(id: DriverId, changes: &DriverChanges) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE drivers SET ");
    for (i, change) in changes.iter().enumerate() {
        if i > 0 {
            builder.push(", ");
        }
        push_assignment(&mut builder, change);
    }
    builder.push(" WHERE id = ").push_bind(id.value());
    builder
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn probe(&self) -> Result<(), RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM drivers)")
            .fetch_one(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, surname, birth_date, phone_number, email, licence_number
            FROM drivers
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn find_all_ordered(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, name, surname, birth_date, phone_number, email, licence_number
            FROM drivers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn add(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (id, name, surname, birth_date, phone_number, email, licence_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, surname, birth_date, phone_number, email, licence_number
            "#,
        )
        .bind(driver.id().value())
        .bind(driver.name())
        .bind(driver.surname())
        .bind(driver.birth_date())
        .bind(driver.phone_number())
        .bind(driver.email())
        .bind(driver.licence_number())
        .fetch_one(&self.pool)
        .await?;

        Ok(Driver::from(row))
    }

    async fn save_changes(&self, id: DriverId, changes: &DriverChanges) -> Result<(), RepositoryError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut builder = build_update(id, changes);
        let result = builder.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Concurrency(format!(
                "driver {id} was removed before the update could be committed"
            )));
        }

        Ok(())
    }

    async fn remove(&self, driver: &Driver) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(driver.id().value())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Concurrency(format!(
                "driver {} was removed by another request",
                driver.id()
            )));
        }

        Ok(())
    }
}
