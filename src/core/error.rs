//! Typed error handling for the API surface
//!
//! Every handler returns [`ApiResult`], and [`ApiError`] converts itself
//! into an HTTP response with a JSON `{code, message}` body.
//!
//! Unknown identifiers referenced *inside a search request* are deliberately
//! not errors: the search endpoint skips them instead of failing the whole
//! query. This type only covers CRUD-path failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::core::entity::Entity;

/// The main error type for API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path-referenced entity does not exist
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    /// A required creation field is absent from the payload
    #[error("Missing {field}")]
    MissingField { field: &'static str },

    /// The request body could not be used
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// The storage facade failed (snapshot I/O, serialization)
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Build a `NotFound` for a given entity type
    pub fn not_found<T: Entity>(id: Uuid) -> Self {
        ApiError::NotFound {
            entity_type: T::resource_name_singular(),
            id,
        }
    }

    /// Wrap a storage-layer failure
    pub fn storage(err: anyhow::Error) -> Self {
        ApiError::Storage {
            message: err.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MissingField { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::MissingField { .. } => "MISSING_FIELD",
            ApiError::InvalidBody { .. } => "INVALID_BODY",
            ApiError::Storage { .. } => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
