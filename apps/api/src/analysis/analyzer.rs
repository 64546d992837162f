//! Analysis pipeline: extract résumé text → build prompt → one completion call.

use bytes::Bytes;
use tracing::info;

use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CompletionRequest};
use crate::state::AppState;

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 1500;

/// One `/analyze` submission. Lives only for the duration of the request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume: Bytes,
    pub job_description: String,
    pub tone: String,
}

/// Runs the full pipeline and returns the model's feedback, trimmed.
///
/// Stops at the first failing stage. A missing API key is detected after
/// extraction but before any outbound call.
pub async fn analyze_resume(state: &AppState, request: AnalysisRequest) -> Result<String, AppError> {
    let resume_text = state
        .extractor
        .extract_text(request.resume)
        .await
        .map_err(AppError::PdfParse)?;

    if resume_text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }

    let openai = &state.config.openai;
    let api_key = openai.api_key.clone().ok_or(AppError::MissingApiKey)?;

    let prompt = build_analysis_prompt(&resume_text, &request.job_description, &request.tone);

    let completion = CompletionRequest {
        model: openai.model.clone(),
        messages: vec![ChatMessage::user(prompt)],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
        base_url: openai.base_url.clone(),
        api_key,
    };

    info!(
        "Requesting analysis (model: {}, resume_chars: {}, tone: {})",
        completion.model,
        resume_text.len(),
        request.tone
    );

    let content = state.llm.complete(&completion).await?;

    Ok(content.trim().to_string())
}
