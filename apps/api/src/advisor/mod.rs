//! Career advisor — answers a chat message with the hosted LLM, falling back
//! to the rule-based recommender whenever the LLM cannot answer.
//!
//! `AppState` holds an `Arc<dyn AdviceProvider>`; the LLM-backed provider is
//! wired in at startup and tests substitute their own.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::llm_client::{LlmClient, LlmError};
use crate::recommender::{recommend, Catalog, Profile, Recommendation};

use self::prompts::{build_advisor_prompt, ADVISOR_SYSTEM};

/// Prefix of every reply produced by the rule-based path.
pub const FALLBACK_HEADER: &str = "⚠ The AI advisor is unavailable. Rule-based suggestion:";

/// Everything the advisor needs to answer one message.
#[derive(Debug, Clone, Copy)]
pub struct AdviceRequest<'a> {
    pub message: &'a str,
    pub profile: &'a Profile,
    pub resume_text: &'a str,
}

/// Produces a free-text reply to a chat message. Implement this to swap
/// the primary response path without touching handlers.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn advise(&self, request: &AdviceRequest<'_>) -> Result<String, LlmError>;
}

/// Primary advisor backed by the hosted model.
pub struct LlmAdvisor(pub LlmClient);

#[async_trait]
impl AdviceProvider for LlmAdvisor {
    async fn advise(&self, request: &AdviceRequest<'_>) -> Result<String, LlmError> {
        let prompt = build_advisor_prompt(request.message, request.profile, request.resume_text);
        self.0.complete(&prompt, ADVISOR_SYSTEM).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Llm,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
    /// Present only when the rule-based recommender produced the reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Recommendation>>,
}

/// Answers `request` with the provider, or with ranked catalog roles when
/// the provider errors or returns nothing. Never fails.
pub async fn respond(
    provider: &dyn AdviceProvider,
    catalog: &Catalog,
    request: &AdviceRequest<'_>,
) -> ChatReply {
    match provider.advise(request).await {
        Ok(reply) if !reply.trim().is_empty() => ChatReply {
            reply,
            source: ReplySource::Llm,
            recommendations: None,
        },
        Ok(_) => {
            warn!("Advisor returned an empty reply, using rule-based fallback");
            fallback_reply(request.profile, catalog)
        }
        Err(e) => {
            warn!("Advisor failed ({e}), using rule-based fallback");
            fallback_reply(request.profile, catalog)
        }
    }
}

fn fallback_reply(profile: &Profile, catalog: &Catalog) -> ChatReply {
    let recommendations = recommend(profile, catalog);
    ChatReply {
        reply: render_fallback(&recommendations),
        source: ReplySource::Fallback,
        recommendations: Some(recommendations),
    }
}

/// Renders ranked roles as a numbered markdown list under [`FALLBACK_HEADER`].
pub fn render_fallback(recommendations: &[Recommendation]) -> String {
    let lines: Vec<String> = recommendations
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. **{}** (score {}) - {}\n   Why: {}\n   Roadmap: {}",
                i + 1,
                r.role,
                r.score,
                r.description,
                r.explanation,
                r.roadmap
            )
        })
        .collect();

    format!("{FALLBACK_HEADER}\n\n{}", lines.join("\n"))
}
