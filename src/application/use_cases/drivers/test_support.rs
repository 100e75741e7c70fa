//! Fixtures shared by the driver use case tests

use chrono::NaiveDate;

use crate::domain::models::driver::{CreateDriverData, Driver};
use crate::shared::errors::RepositoryError;

pub(crate) fn create_test_driver(id: i64, name: &str) -> Driver {
    Driver::new(CreateDriverData {
        id,
        name: Some(name.to_string()),
        surname: Some("Kowalski".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1999, 12, 31),
        phone_number: Some("+48 600 100 200".to_string()),
        email: None,
        licence_number: Some("AB/123/99".to_string()),
    })
}

pub(crate) fn storage_error() -> RepositoryError {
    RepositoryError::Storage {
        message: "connection refused".to_string(),
        code: Some("08001".to_string()),
    }
}
