use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::reports::errors::RegistryError;
use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    fn registry_status(error: &RegistryError) -> StatusCode {
        match error {
            RegistryError::NotAuthorized => StatusCode::FORBIDDEN,
            RegistryError::NotFound => StatusCode::NOT_FOUND,
            RegistryError::AlreadyExists | RegistryError::CapacityExceeded => {
                StatusCode::CONFLICT
            }
            RegistryError::FeeNotPaid => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            AppError::Registry(ref error) => (
                Self::registry_status(error),
                error.to_string(),
                Some(error.code()),
            ),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            AppError::Unauthorized(ref msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
            AppError::ExternalServiceError(ref msg) => {
                tracing::error!("External service error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg.clone(), None)
            }
        };

        let body = match code {
            Some(code) => Json(ApiResponse::<()>::error_with_code(message, code)),
            None => Json(ApiResponse::<()>::error(Some(message), None)),
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
