//! Axum route handlers for chat, recommendations and feedback.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisor::{respond, AdviceRequest, ChatReply};
use crate::chat_log::{ChatRecord, FeedbackRecord};
use crate::errors::AppError;
use crate::recommender::{recommend, Profile, Recommendation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub profile: Profile,
    /// Text from a previously uploaded resume, if any.
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(flatten)]
    pub reply: ChatReply,
    /// False when the chat log sink rejected the exchange.
    pub logged: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub feedback: String,
    /// Wider than the stored `u8` so out-of-range numbers reach validation.
    pub rating: i64,
}

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/chat
///
/// Answers with the LLM advisor, or with ranked catalog roles if it fails.
/// The exchange is logged afterwards; a logging failure does not fail the chat.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let reply = respond(
        state.advisor.as_ref(),
        &state.catalog,
        &AdviceRequest {
            message: &request.message,
            profile: &request.profile,
            resume_text: &request.resume_text,
        },
    )
    .await;

    let record = ChatRecord::new(
        &request.message,
        &reply.reply,
        &request.profile.skills,
        &request.profile.interests,
    );
    let logged = match state.chat_log.log_chat(&record).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Could not log chat {}: {e}", record.id);
            false
        }
    };

    Ok(Json(ChatResponse { reply, logged }))
}

/// POST /api/v1/recommendations
///
/// Runs the rule-based recommender directly, without the LLM.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationsResponse {
        recommendations: recommend(&profile, &state.catalog),
    })
}

/// POST /api/v1/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<StatusCode, AppError> {
    let rating = u8::try_from(request.rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| {
            AppError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            ))
        })?;

    let record = FeedbackRecord::new(request.feedback.trim(), rating);
    state.chat_log.log_feedback(&record).await?;

    Ok(StatusCode::NO_CONTENT)
}
