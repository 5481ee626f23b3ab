use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use std::fmt;

use crate::ui;

/// A failed exchange with the rental backend.
#[derive(Debug)]
pub enum ApiError {
    /// The backend could not be reached at all.
    Connection(String),
    /// The backend answered with a non-success status. The message is the
    /// server-supplied reason when the endpoint provides one, otherwise a
    /// fixed fallback for the operation.
    Request(String),
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Connection(message) | ApiError::Request(message) => message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connection(message) => write!(f, "connection failed: {message}"),
            ApiError::Request(message) => write!(f, "request failed: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Html(ui::render_error(&self.message))).into_response()
    }
}
