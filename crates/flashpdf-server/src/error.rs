use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tokio::task::JoinError;

use flashpdf_core::error::CoreError;
use flashpdf_export::error::ExportError;

pub const UPLOAD_TOO_LARGE: &str = "the uploaded file is too large";

/// Unified API error type for all route handlers.
///
/// Everything that can go wrong with an upload is a `Processing` error:
/// unreadable form data, bad JSON, missing fields, or a PDF failure.
#[derive(Debug)]
pub enum ApiError {
    Processing(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Processing(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Processing(e.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Processing(e.to_string())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::Processing(UPLOAD_TOO_LARGE.to_string());
        }
        ApiError::Processing(format!("could not read upload: {}", e.body_text()))
    }
}

/// A crashed build task is reported like any other rendering failure.
impl From<JoinError> for ApiError {
    fn from(e: JoinError) -> Self {
        tracing::error!(error = %e, "PDF build task did not complete");
        ApiError::Processing("PDF rendering failed".to_string())
    }
}

impl From<tera::Error> for ApiError {
    fn from(e: tera::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}
