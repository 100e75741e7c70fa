//! Driver Handlers
//!
//! HTTP handlers for driver CRUD operations.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::domain::models::driver::DriverId;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{
    CreateDriverDto, DriverResponseDto, UpdateDriverDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for driver endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route("/:id", get(get_driver_by_id).put(update_driver).delete(delete_driver))
}

/// GET /drivers - List all drivers
///
/// # Responses
///
/// * 200 OK - All drivers, sorted by id
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn list_drivers(State(state): State<AppState>) -> Result<Json<Vec<DriverResponseDto>>, ApiError> {
    let drivers = state.list_drivers_use_case.execute().await?;

    Ok(Json(drivers.iter().map(DriverResponseDto::from).collect()))
}

/// GET /drivers/:id - Get a driver by ID
///
/// # Responses
///
/// * 200 OK - Driver found
/// * 400 Bad Request - Id is not a number
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Storage failure
#[axum::debug_handler]
async fn get_driver_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id: DriverId = id.parse()?;

    let driver = state.get_driver_by_id_use_case.execute(driver_id).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// POST /drivers - Create a new driver
///
/// # Responses
///
/// * 201 Created - Driver created, `Location` points at the new resource
/// * 500 Internal Server Error - Storage failure (including a duplicate id) or commit conflict
#[axum::debug_handler]
async fn create_driver(
    State(state): State<AppState>,
    Json(dto): Json<CreateDriverDto>,
) -> Result<impl IntoResponse, ApiError> {
    let driver = state.create_driver_use_case.execute(dto.into()).await?;

    let location = format!("/drivers/{}", driver.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(DriverResponseDto::from(driver)),
    ))
}

/// PUT /drivers/:id - Partial update of a driver
///
/// Only fields present in the body and different from the stored row are written.
/// An `id` in the body is ignored.
///
/// # Responses
///
/// * 200 OK - Updated driver
/// * 400 Bad Request - Id is not a number
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Storage failure or commit conflict
#[axum::debug_handler]
async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateDriverDto>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id: DriverId = id.parse()?;

    if let Some(body_id) = dto.id.filter(|body_id| *body_id != driver_id.value()) {
        tracing::debug!(driver_id = %driver_id, body_id, "Ignoring id in update payload");
    }

    let driver = state
        .update_driver_use_case
        .execute(driver_id, dto.into())
        .await?;

    Ok(Json(DriverResponseDto::from(driver)))
}

/// DELETE /drivers/:id - Delete a driver
///
/// # Responses
///
/// * 200 OK - The deleted driver's last snapshot
/// * 400 Bad Request - Id is not a number
/// * 404 Not Found - Driver does not exist
/// * 500 Internal Server Error - Storage failure or commit conflict
#[axum::debug_handler]
async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DriverResponseDto>, ApiError> {
    let driver_id: DriverId = id.parse()?;

    let driver = state.delete_driver_use_case.execute(driver_id).await?;

    Ok(Json(DriverResponseDto::from(driver)))
}
