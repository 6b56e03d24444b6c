use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snip_core::{ResolveError, ShortenerError, StorageError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shorten(#[from] ShortenerError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored url cannot be used as a redirect target: {0}")]
    InvalidRedirect(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Shorten(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Resolve(ResolveError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
