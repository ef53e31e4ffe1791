//! Error handling - maps handler failures to JSON error responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::RepoError;
use blog_shared::ErrorResponse;
use thiserror::Error;

/// Application-level error type.
///
/// Every variant carries the exact message shown to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Log a storage failure server-side and hide it behind `message`.
    pub fn store(message: &str, err: RepoError) -> Self {
        tracing::error!(error = %err, "{}", message);
        AppError::Internal(message.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

impl AppError {
    fn body(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(message)
            | AppError::BadRequest(message)
            | AppError::Internal(message) => ErrorResponse::new(message),
            AppError::Validation(errors) => {
                ErrorResponse::new("Invalid post data").with_errors(errors.iter().cloned())
            }
        }
    }

    /// Render the error body stamped with the request's correlation ID.
    pub fn response_for_request(&self, request_id: &str) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body().with_request_id(request_id))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
