use axum::{Json, extract::Path};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Status-code error page: `/errors/404` renders the JSON body for a 404.
/// A code that is not a number renders the 404 page.
pub async fn error_page(Path(code): Path<String>) -> AppError {
    AppError::from_status(code.parse().unwrap_or(404))
}

pub async fn not_found() -> AppError {
    AppError::from_status(404)
}
