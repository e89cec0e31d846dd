//! Error types for Parking Core.
//!
//! Defines a unified error type that maps cleanly to HTTP responses. Every
//! error body is a JSON-encoded string carrying the human-readable message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Unified error type for Parking Core operations.
#[derive(Debug, Error)]
pub enum ParkingError {
    /// Missing query string or missing required parameter.
    #[error("{0}")]
    BadRequest(String),

    /// Unknown endpoint or unknown ticket.
    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ParkingError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ParkingError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ParkingError::NotFound(_) => StatusCode::NOT_FOUND,
            ParkingError::Database(_) | ParkingError::Config(_) | ParkingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ParkingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ParkingError::BadRequest(msg) | ParkingError::NotFound(msg) => {
                tracing::debug!(status = %status, message = %msg, "Rejected request");
                msg.clone()
            }
            ParkingError::Database(e) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %e, "Database error");
                "A database error occurred".to_string()
            }
            ParkingError::Config(msg) => {
                tracing::error!(error = %msg, "Configuration error");
                "Configuration error".to_string()
            }
            ParkingError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
        };

        (status, Json(message)).into_response()
    }
}

/// Result type alias for Parking operations.
pub type ParkingResult<T> = Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ParkingError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ParkingError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ParkingError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ParkingError::Database(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_client_error_body_is_json_string() {
        let response = ParkingError::NotFound("wrong endpoint".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], br#""wrong endpoint""#);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ParkingError::Internal("id space exhausted".into()).into_response();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: String = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, "An internal error occurred");
    }
}
