use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use parlor_core::CoreError;
use parlor_core::scrape::ProviderError;
use std::fmt;

use crate::envelope::failure;

pub type AppResult<T> = Result<T, AppError>;

/// HTTP-facing error: a status code plus a human-readable message, rendered
/// as the failure envelope.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(failure(self.message))).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound => Self::not_found("record not found"),
            CoreError::InvalidCredentials => Self::unauthorized("invalid credentials"),
            CoreError::Token(_) => Self::unauthorized(err.to_string()),
            CoreError::Database(sqlx::Error::Database(db_err))
                if db_err.is_unique_violation() =>
            {
                Self::conflict("record already exists")
            }
            other => Self::internal(other.to_string()),
        }
    }
}

/// Primary-source provider failures become upstream-unavailable responses;
/// a missing identifier keeps its 404 meaning.
impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound => Self::not_found("not found upstream"),
            other => Self::bad_gateway(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_not_found_maps_to_404() {
        let err = AppError::from(ProviderError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn provider_failures_map_to_bad_gateway() {
        let err = AppError::from(ProviderError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);

        let err = AppError::from(ProviderError::InvalidApiKey);
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn core_not_found_maps_to_404() {
        let err = AppError::from(CoreError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
