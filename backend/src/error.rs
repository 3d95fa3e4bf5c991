//! Error types and error handling for the application
//!
//! Validation failures are not errors here: handlers turn them into a
//! re-rendered form. Everything else ends up in `AppError`, which renders a
//! generic HTML failure page via `IntoResponse`.

use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

/// Body text of the failure page for store and internal errors
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong while handling your request. Please try again later.";

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// No contact has the given id
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact store failed (connection loss, write failure, bad migration)
    #[error("Persistence error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ContactNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Store and internal failures are logged in full but shown generically
        let message = match &self {
            AppError::ContactNotFound(_) => "The requested contact does not exist.".to_string(),
            AppError::Persistence(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "Request failed");
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        };

        (status, Html(views::error_page(status, &message))).into_response()
    }
}
