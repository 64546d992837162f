use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// The `Display` text is what the client sees in `detail`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart body: {0}")]
    Multipart(String),

    #[error("Uploaded request body is too large.")]
    PayloadTooLarge,

    #[error("Could not extract text from the PDF.")]
    EmptyExtraction,

    #[error("Error processing the PDF file.")]
    PdfParse(#[source] ExtractError),

    #[error("OpenAI API key not configured.")]
    MissingApiKey,

    #[error("Analysis failed: {0}")]
    Llm(#[from] LlmError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Multipart(_) | AppError::EmptyExtraction => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::PdfParse(_) | AppError::MissingApiKey | AppError::Llm(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Body-limit overruns surface from multipart reads; keep them distinct from
/// malformed bodies.
impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        multipart_error(e.status(), e.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(e: MultipartRejection) -> Self {
        multipart_error(e.status(), e.body_text())
    }
}

fn multipart_error(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Multipart(message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::PdfParse(e) => tracing::error!("Error parsing PDF: {e}"),
            AppError::MissingApiKey => tracing::error!("OpenAI API key not found"),
            AppError::Llm(e) => tracing::error!("Unexpected error during resume analysis: {e}"),
            other => tracing::warn!("Rejected analysis request: {other}"),
        }

        let body = Json(json!({ "detail": self.to_string() }));

        (self.status(), body).into_response()
    }
}
