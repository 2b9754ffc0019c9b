//! Server-wide error type
//!
//! Feature handlers return their own `thiserror` enums. Those convert into
//! [`AppError`], which owns the mapping to HTTP status codes and the JSON
//! error envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ecologic_common::ValidationErrors;
use thiserror::Error;

use crate::api::response::ErrorResponse;

/// Result type alias for handler operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Client sent a payload that failed structural or semantic checks
    #[error("{0}")]
    InvalidPayload(ValidationErrors),

    #[error("{0}")]
    NotFound(String),

    /// Deployment is missing required settings (e.g. ERP credentials)
    #[error("{0}")]
    Misconfigured(String),

    /// Upstream answered with a non-success status; surfaced verbatim
    #[error("Upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Upstream could not be reached or answered with something unreadable
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream did not answer in time")]
    UpstreamTimeout,

    #[error("Payload exceeds the limit of {0} bytes")]
    PayloadTooLarge(usize),
}

impl AppError {
    /// Shorthand for a body that could not be read or parsed at all
    pub fn invalid_body(message: impl Into<String>) -> Self {
        AppError::InvalidPayload(ValidationErrors::single("body", message))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Misconfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            },
            AppError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidPayload(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Misconfigured(_) => "MISCONFIGURED",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            AppError::UpstreamTimeout => "UPSTREAM_TIMEOUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let body = match self {
            AppError::InvalidPayload(errors) => {
                tracing::debug!(errors = %errors, "Rejected invalid payload");
                let details = serde_json::to_value(&errors).unwrap_or_default();
                ErrorResponse::with_details(code, "Invalid payload", details)
            },
            AppError::Misconfigured(message) => {
                tracing::error!("Configuration error: {}", message);
                ErrorResponse::new(code, message)
            },
            AppError::Upstream { status, body } => {
                tracing::warn!(upstream_status = status, "Upstream request failed");
                ErrorResponse::new(code, body)
            },
            other => {
                if status.is_server_error() {
                    tracing::warn!(error = %other, "Request failed");
                }
                ErrorResponse::new(code, other.to_string())
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidPayload(errors)
    }
}
