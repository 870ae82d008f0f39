//! Unified error handling for the API.
//!
//! Provides a unified `AppError` type that logs server-side failures before
//! responding to the client. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input failed validation before doing any work.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Tried to cart a product with no remaining stock.
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// Checkout requested on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Login via the external auth endpoint failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Session store operation failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server-side failures; client errors stay at debug
        match &self {
            Self::Session(_) | Self::Internal(_) => {
                tracing::error!(error = %self, "Request error");
            }
            Self::Auth(err) if !matches!(err, AuthError::Rejected(_)) => {
                tracing::warn!(error = %self, "Upstream auth failure");
            }
            _ => tracing::debug!(error = %self, "Client error"),
        }

        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::OutOfStock(_) | Self::EmptyCart => StatusCode::CONFLICT,
            Self::Auth(err) => match err {
                AuthError::Rejected(_) => StatusCode::UNAUTHORIZED,
                AuthError::Transport(_) | AuthError::UpstreamStatus(_) => StatusCode::BAD_GATEWAY,
            },
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => match err {
                AuthError::Rejected(message) => message.clone(),
                AuthError::Transport(_) | AuthError::UpstreamStatus(_) => {
                    "Network request failed. Please check your connection.".to_string()
                }
            },
            Self::Validation(message) => message.clone(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::OutOfStock(name) => format!("{name} is out of stock"),
            Self::EmptyCart => "Cart is empty".to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product bev001".to_string());
        assert_eq!(err.to_string(), "Not found: product bev001");

        let err = AppError::Validation("missing email".to_string());
        assert_eq!(err.to_string(), "Validation error: missing email");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::Validation("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::OutOfStock("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(get_status(AppError::EmptyCart), StatusCode::CONFLICT);
        assert_eq!(
            get_status(AppError::Auth(AuthError::Rejected(
                "Invalid credentials".to_string()
            ))),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
