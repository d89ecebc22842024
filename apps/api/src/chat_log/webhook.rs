//! Spreadsheet webhook sink — appends each record as a row by POSTing
//! `{"sheet": ..., "row": [...]}` to a configured URL.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{ChatLog, ChatLogError, ChatRecord, FeedbackRecord};

const CHATS_SHEET: &str = "Chats";
const FEEDBACK_SHEET: &str = "Feedback";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct AppendRow<'a> {
    sheet: &'a str,
    row: Vec<String>,
}

#[derive(Clone)]
pub struct WebhookChatLog {
    client: Client,
    url: String,
}

impl WebhookChatLog {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }

    async fn append(&self, body: &AppendRow<'_>) -> Result<(), ChatLogError> {
        let response = self.client.post(&self.url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatLogError::Rejected {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        debug!("Appended row to sheet '{}'", body.sheet);
        Ok(())
    }
}

#[async_trait]
impl ChatLog for WebhookChatLog {
    async fn log_chat(&self, record: &ChatRecord) -> Result<(), ChatLogError> {
        self.append(&AppendRow {
            sheet: CHATS_SHEET,
            row: record.row(),
        })
        .await
    }

    async fn log_feedback(&self, record: &FeedbackRecord) -> Result<(), ChatLogError> {
        self.append(&AppendRow {
            sheet: FEEDBACK_SHEET,
            row: record.row(),
        })
        .await
    }
}
