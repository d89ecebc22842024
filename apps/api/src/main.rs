mod advisor;
mod chat_log;
mod config;
mod errors;
mod llm_client;
mod recommender;
mod resume;
mod routes;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisor::LlmAdvisor;
use crate::chat_log::{ChatLog, TracingChatLog, WebhookChatLog};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::recommender::Catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    // Load the career catalog once; a missing or empty catalog is fatal
    let catalog = Catalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Failed to load career catalog from {}",
            config.catalog_path.display()
        )
    })?;
    info!(
        "Career catalog loaded: {} roles from {}",
        catalog.len(),
        config.catalog_path.display()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm);
    info!(
        "LLM client initialized (model: {}, timeout: {:?}, attempts: {}, fallback after at most {:?})",
        llm_client::MODEL,
        config.llm.timeout,
        config.llm.max_attempts,
        config.llm.worst_case_latency()
    );

    // Chat log sink: spreadsheet webhook when configured, tracing otherwise
    let chat_log: Arc<dyn ChatLog> = match &config.chat_log_webhook_url {
        Some(url) => {
            info!("Chat log: webhook");
            Arc::new(WebhookChatLog::new(url.clone()))
        }
        None => {
            info!("Chat log: tracing only (CHAT_LOG_WEBHOOK_URL not set)");
            Arc::new(TracingChatLog)
        }
    };

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        advisor: Arc::new(LlmAdvisor(llm)),
        chat_log,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
