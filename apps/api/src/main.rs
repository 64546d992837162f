mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::PdfTextExtractor;
use crate::llm_client::OpenAiClient;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    if config.openai.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /analyze will fail until it is configured");
    }

    // Initialize LLM client
    let llm = OpenAiClient::new(Duration::from_secs(config.openai.timeout_secs))?;
    info!(
        "LLM client initialized (model: {}, endpoint: {})",
        config.openai.model,
        config.openai.base_url_or_default()
    );

    let cors = cors_layer(&config.cors_allowed_origin)?;
    info!("CORS allowed origin: {}", config.cors_allowed_origin);

    let port = config.port;

    // Build app state
    let state = AppState {
        config: Arc::new(config),
        extractor: Arc::new(PdfTextExtractor),
        llm: Arc::new(llm),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
