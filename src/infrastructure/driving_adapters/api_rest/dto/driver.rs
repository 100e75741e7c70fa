//! Driver DTOs
//!
//! Data transfer objects for driver API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::models::driver::{CreateDriverData, Driver, DriverPatch, FieldPatch};

/// Absent keys fall back to `FieldPatch::Missing` through `#[serde(default)]`,
/// so this only ever sees `null` or a value.
impl<'de, T> Deserialize<'de> for FieldPatch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(FieldPatch::from)
    }
}

/// DTO for creating a new driver
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverDto {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub licence_number: Option<String>,
}

impl From<CreateDriverDto> for CreateDriverData {
    fn from(dto: CreateDriverDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            surname: dto.surname,
            birth_date: dto.birth_date,
            phone_number: dto.phone_number,
            email: dto.email,
            licence_number: dto.licence_number,
        }
    }
}

/// DTO for partial driver update (PUT)
///
/// Every field is optional. `id` is accepted for compatibility with clients that
/// send the whole record back, but it never changes the stored key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    pub surname: FieldPatch<String>,
    #[serde(default)]
    pub birth_date: FieldPatch<NaiveDate>,
    #[serde(default)]
    pub phone_number: FieldPatch<String>,
    #[serde(default)]
    pub email: FieldPatch<String>,
    #[serde(default)]
    pub licence_number: FieldPatch<String>,
}

impl From<UpdateDriverDto> for DriverPatch {
    fn from(dto: UpdateDriverDto) -> Self {
        Self {
            name: dto.name,
            surname: dto.surname,
            birth_date: dto.birth_date,
            phone_number: dto.phone_number,
            email: dto.email,
            licence_number: dto.licence_number,
        }
    }
}

/// Driver response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponseDto {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub licence_number: Option<String>,
}

impl From<&Driver> for DriverResponseDto {
    fn from(driver: &Driver) -> Self {
        Self {
            id: driver.id().value(),
            name: driver.name().map(str::to_string),
            surname: driver.surname().map(str::to_string),
            birth_date: driver.birth_date(),
            phone_number: driver.phone_number().map(str::to_string),
            email: driver.email().map(str::to_string),
            licence_number: driver.licence_number().map(str::to_string),
        }
    }
}

impl From<Driver> for DriverResponseDto {
    fn from(driver: Driver) -> Self {
        Self::from(&driver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_dto_distinguishes_missing_from_null() {
        let dto: UpdateDriverDto = serde_json::from_value(json!({
            "name": "Janusz",
            "email": null
        }))
        .unwrap();

        assert_eq!(dto.name, FieldPatch::Value("Janusz".to_string()));
        assert_eq!(dto.email, FieldPatch::Null);
        assert_eq!(dto.surname, FieldPatch::Missing);
        assert_eq!(dto.id, None);
    }

    #[test]
    fn test_update_dto_parses_birth_date() {
        let dto: UpdateDriverDto = serde_json::from_value(json!({
            "id": 2,
            "birthDate": "1999-12-31"
        }))
        .unwrap();

        assert_eq!(dto.id, Some(2));
        assert_eq!(dto.birth_date, FieldPatch::Value(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()));
    }

    #[test]
    fn test_empty_update_dto_is_empty_patch() {
        let dto: UpdateDriverDto = serde_json::from_value(json!({})).unwrap();
        let patch = DriverPatch::from(dto);

        assert!(patch.name.is_missing());
        assert!(patch.licence_number.is_missing());
    }

    #[test]
    fn test_create_dto_requires_id() {
        let result: Result<CreateDriverDto, _> = serde_json::from_value(json!({ "name": "Jan" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_serializes_camel_case_with_nulls() {
        let driver = Driver::new(CreateDriverData {
            id: 99_123_100_000,
            name: Some("Jan".to_string()),
            licence_number: Some("AB123".to_string()),
            ..Default::default()
        });

        let value = serde_json::to_value(DriverResponseDto::from(&driver)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 99_123_100_000_i64,
                "name": "Jan",
                "surname": null,
                "birthDate": null,
                "phoneNumber": null,
                "email": null,
                "licenceNumber": "AB123"
            })
        );
    }
}
