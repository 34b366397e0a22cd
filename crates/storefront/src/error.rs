//! Application error types for the storefront.
//!
//! Internal error details are captured in Sentry and logged via tracing;
//! responses only ever carry a generic status message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::cart_store::CartStoreError;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("cart store error: {0}")]
    CartStore(#[from] CartStoreError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Session(_) | Self::CartStore(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            sentry::capture_error(&self);
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = match status {
            StatusCode::NOT_FOUND => "Página no encontrada",
            StatusCode::BAD_REQUEST => "Solicitud inválida",
            _ => "Ocurrió un error. Intentá de nuevo más tarde.",
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
