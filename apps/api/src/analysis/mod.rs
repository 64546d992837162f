// Résumé analysis: multipart intake, prompt composition, single LLM call.
// All LLM calls go through llm_client; all PDF parsing goes through extraction.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
