//! Axum route handler for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::header,
    response::IntoResponse,
};

use crate::analysis::analyzer::{analyze_resume, AnalysisRequest};
use crate::errors::AppError;
use crate::state::AppState;

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

/// POST /analyze
///
/// Multipart fields: `resume` (PDF file), `job_description`, `tone`.
/// Responds with the model's markdown feedback as the raw body.
#[tracing::instrument(skip_all)]
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let multipart = multipart?;
    let request = read_analysis_form(multipart).await?;

    let feedback = analyze_resume(&state, request).await?;

    Ok(([(header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE)], feedback))
}

/// Collects the three form fields. Unknown fields are ignored; an empty text
/// field counts as missing.
async fn read_analysis_form(mut multipart: Multipart) -> Result<AnalysisRequest, AppError> {
    let mut resume = None;
    let mut job_description = None;
    let mut tone = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                resume = Some(field.bytes().await?);
            }
            Some("job_description") => {
                job_description = Some(field.text().await?);
            }
            Some("tone") => {
                tone = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(AnalysisRequest {
        resume: resume.ok_or(AppError::MissingField("resume"))?,
        job_description: job_description
            .filter(|v| !v.is_empty())
            .ok_or(AppError::MissingField("job_description"))?,
        tone: tone
            .filter(|v| !v.is_empty())
            .ok_or(AppError::MissingField("tone"))?,
    })
}
