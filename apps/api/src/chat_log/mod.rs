//! Chat and feedback logging.
//!
//! Every chat exchange and every feedback submission is handed to a
//! `ChatLog` sink after the reply is produced. Chat logging is best-effort:
//! a failing sink is reported but never fails the chat.

pub mod webhook;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

pub use webhook::WebhookChatLog;

/// Timestamp layout used in logged rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum ChatLogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("log sink rejected row (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct ChatRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub bot_response: String,
    pub skills: String,
    pub interests: String,
}

impl ChatRecord {
    pub fn new(user_message: &str, bot_response: &str, skills: &str, interests: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            skills: skills.to_string(),
            interests: interests.to_string(),
        }
    }

    /// Row layout of the "Chats" sheet.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.user_message.clone(),
            self.bot_response.clone(),
            self.skills.clone(),
            self.interests.clone(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub feedback: String,
    pub rating: u8,
}

impl FeedbackRecord {
    pub fn new(feedback: &str, rating: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            feedback: feedback.to_string(),
            rating,
        }
    }

    /// Row layout of the "Feedback" sheet.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.feedback.clone(),
            self.rating.to_string(),
        ]
    }
}

#[async_trait]
pub trait ChatLog: Send + Sync {
    async fn log_chat(&self, record: &ChatRecord) -> Result<(), ChatLogError>;
    async fn log_feedback(&self, record: &FeedbackRecord) -> Result<(), ChatLogError>;
}

/// Default sink when no webhook is configured: one structured event per record.
pub struct TracingChatLog;

#[async_trait]
impl ChatLog for TracingChatLog {
    async fn log_chat(&self, record: &ChatRecord) -> Result<(), ChatLogError> {
        info!(
            chat_id = %record.id,
            skills = %record.skills,
            interests = %record.interests,
            message_len = record.user_message.len(),
            reply_len = record.bot_response.len(),
            "chat exchange"
        );
        Ok(())
    }

    async fn log_feedback(&self, record: &FeedbackRecord) -> Result<(), ChatLogError> {
        info!(
            feedback_id = %record.id,
            rating = record.rating,
            feedback = %record.feedback,
            "feedback received"
        );
        Ok(())
    }
}
