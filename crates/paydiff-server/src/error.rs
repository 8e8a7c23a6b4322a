use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// Failures while starting or configuring the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Failures surfaced to API clients as JSON error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid payload structure")]
    InvalidPayload(Vec<String>),

    #[error("no comparison result found")]
    ComparisonNotFound,

    #[error("store error: {0}")]
    Store(#[from] paydiff_store::StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::ComparisonNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
    timestamp: DateTime<Utc>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errors = match &self {
            ApiError::InvalidPayload(errors) => Some(errors.clone()),
            ApiError::ComparisonNotFound => Some(vec![
                "Send both payloads first to generate a comparison".to_string(),
            ]),
            ApiError::Store(_) => None,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            success: false,
            message: self.to_string(),
            errors,
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}
