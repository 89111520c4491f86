//! Error handling for handlers.
//!
//! Store failures never reach this type; handlers turn them into redirects or
//! a re-rendered form. What is left is a view that failed to render.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Failed to build response");

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body("Something went wrong...")
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
