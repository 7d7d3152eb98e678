//! API error type with per-variant HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Error surface of the HTTP layer. Every variant maps to one status
/// code and a `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    /// The admin endpoint is called but no token is configured.
    MissingAdminToken,
    /// Wrong or absent `x-admin-token` header.
    Unauthorized,
    /// The request payload failed validation.
    BadRequest(String),
    /// A named entity does not exist.
    NotFound(String),
    /// Store or task failure.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingAdminToken | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::MissingAdminToken => "admin token not configured".to_string(),
            Self::Unauthorized => "unauthorized".to_string(),
            Self::BadRequest(msg) | Self::Internal(msg) | Self::NotFound(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.message());
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<dramlog_core::Error> for ApiError {
    fn from(e: dramlog_core::Error) -> Self {
        match e {
            dramlog_core::Error::InvalidData(msg) => Self::BadRequest(msg),
            dramlog_core::Error::NotFound { entity, id } => {
                Self::NotFound(format!("{entity} {id} not found"))
            }
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Internal(e.to_string())
    }
}
