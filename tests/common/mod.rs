//! Common test utilities for e2e tests
//!
//! Builds the full router over a chosen repository and offers helpers to
//! send JSON requests through it.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower::ServiceExt;

use driver_registry::domain::gateways::DriverRepository;
use driver_registry::domain::models::driver::NullPolicy;
use driver_registry::infrastructure::driven_adapters::driver_repository::InMemoryDriverRepository;
use driver_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
}

/// Response captured from a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("response body is not the expected JSON")
    }
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        Self::with_null_policy(NullPolicy::Ignore)
    }

    pub fn with_null_policy(null_policy: NullPolicy) -> Self {
        Self::with_repository(Arc::new(InMemoryDriverRepository::new()), null_policy)
    }

    pub fn with_repository(repository: Arc<dyn DriverRepository>, null_policy: NullPolicy) -> Self {
        Self {
            router: build_router(AppState::new(repository, null_policy)),
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body")
            .to_vec();

        TestResponse { status, headers, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}

/// Helper struct for creating driver request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub licence_number: Option<String>,
}

impl Default for CreateDriverRequest {
    fn default() -> Self {
        Self {
            id: 99_123_100_000,
            name: Some("Jan".to_string()),
            surname: Some("Kowalski".to_string()),
            birth_date: Some("1999-12-31".to_string()),
            phone_number: Some("+48 600 100 200".to_string()),
            email: Some("jan.kowalski@example.com".to_string()),
            licence_number: Some("AB/123/99".to_string()),
        }
    }
}

impl CreateDriverRequest {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).expect("serializable request")
    }
}

/// Driver response structure for deserialization
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: i64,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub birth_date: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub licence_number: Option<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
