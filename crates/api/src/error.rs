use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use discos_core::CatalogError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DISK_NOT_FOUND_MESSAGE: &str = "Disco no encontrado";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Ruta no encontrada";
pub const INVALID_PATH_MESSAGE: &str = "Ruta no válida";

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("no route for {0}")]
    RouteNotFound(String),
    #[error(transparent)]
    InvalidPath(#[from] PathRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Catalog(CatalogError::DiskNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Catalog(CatalogError::DiskNotFound { .. }) => DISK_NOT_FOUND_MESSAGE,
            ApiError::RouteNotFound(_) => ROUTE_NOT_FOUND_MESSAGE,
            ApiError::InvalidPath(_) => INVALID_PATH_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request failed");
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
