//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverUseCase, GetDriverByIdUseCase, ListDriversUseCase, UpdateDriverUseCase,
};
use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::NullPolicy;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub get_driver_by_id_use_case: Arc<GetDriverByIdUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,
}

impl AppState {
    /// Wire every driver use case to one repository
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>, null_policy: NullPolicy) -> Self {
        Self {
            list_drivers_use_case: Arc::new(ListDriversUseCase::new(driver_repository.clone())),
            get_driver_by_id_use_case: Arc::new(GetDriverByIdUseCase::new(driver_repository.clone())),
            create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone())),
            update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone(), null_policy)),
            delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(driver_repository)),
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/drivers", handlers::drivers::router())
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
