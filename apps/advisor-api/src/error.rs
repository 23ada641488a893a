//! Error types for the advisor API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("CSV export failed: {0}")]
    Export(#[from] recommendation_engine::export::ExportError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Export(e) => {
                tracing::error!("CSV export failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CSV export failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
