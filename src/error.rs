use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Client-visible failures of the API host.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire shape of every error body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

impl AppError {
    /// The error page for a bare status code, as served by `/errors/{code}`.
    pub fn from_status(code: u16) -> Self {
        let status = StatusCode::from_u16(code)
            .ok()
            .filter(|status| status.is_client_error() || status.is_server_error())
            .unwrap_or(StatusCode::NOT_FOUND);

        AppError::Status {
            status,
            message: default_message(status).to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Status { status, .. } => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn default_message(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "The request was malformed",
        401 => "Authentication is required",
        403 => "Access to this resource is forbidden",
        404 => "Resource was not found",
        500 => "An unexpected server error occurred",
        _ => status.canonical_reason().unwrap_or("Unexpected error"),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                default_message(status).to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorBody {
            status_code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
