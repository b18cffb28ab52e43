use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Error shape for the catalog routes: `{"error": "..."}`.
#[derive(Debug)]
pub struct CatalogError {
    status: StatusCode,
    message: String,
}

impl CatalogError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

impl From<ServiceError> for CatalogError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            other => {
                error!(err = %other, "catalog request failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

/// Error shape for association creation: `{"errors": ["..."]}`.
#[derive(Debug)]
pub struct AssociationError {
    status: StatusCode,
    errors: Vec<String>,
}

impl AssociationError {
    pub fn new(status: StatusCode, errors: Vec<String>) -> Self {
        Self { status, errors }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, vec![message.into()])
    }
}

impl IntoResponse for AssociationError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "errors": self.errors }))).into_response()
    }
}

impl From<ServiceError> for AssociationError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::validation(msg),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, vec![msg]),
            other => {
                error!(err = %other, "restaurant pizza creation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, vec!["internal server error".into()])
            }
        }
    }
}
