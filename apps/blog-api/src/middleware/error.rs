//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_shared::ErrorResponse;
use std::fmt;

use blog_core::error::ServiceError;

/// Application-level error type that converts to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// 404 with an empty body.
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::BadRequest(detail) => {
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(detail))
            }
            AppError::Internal(detail) => {
                // Log internal errors, respond with a generic body
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

// Conversion from service errors
impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
