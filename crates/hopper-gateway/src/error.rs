use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hopper_core::{RedirectorError, ShortenerError, StoreError};
use thiserror::Error;
use tracing::error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shortener(#[from] ShortenerError),
    #[error(transparent)]
    Redirector(#[from] RedirectorError),
    #[error("invalid request body: {0}")]
    BadRequest(String),
    #[error("short code not found")]
    NotFound,
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::Unavailable(_) | StoreError::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
        StoreError::Query(_) | StoreError::InvalidData(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Shortener(ShortenerError::InvalidUrl(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Shortener(ShortenerError::CapacityExhausted { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Shortener(ShortenerError::Store(e))
            | AppError::Redirector(RedirectorError::Store(e)) => store_status(e),
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message shown to the client. Store details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Shortener(ShortenerError::Store(_))
            | AppError::Redirector(RedirectorError::Store(_)) => {
                "storage backend error".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}
