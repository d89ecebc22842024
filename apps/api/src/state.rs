use std::sync::Arc;

use crate::advisor::AdviceProvider;
use crate::chat_log::ChatLog;
use crate::recommender::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Career catalog, loaded once before the listener starts. Read-only.
    pub catalog: Arc<Catalog>,
    /// Primary reply path. Default: `LlmAdvisor`.
    pub advisor: Arc<dyn AdviceProvider>,
    /// Chat and feedback sink. Webhook when configured, tracing otherwise.
    pub chat_log: Arc<dyn ChatLog>,
}
