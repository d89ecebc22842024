// Shared fixtures for unit and router tests.

use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::advisor::{AdviceProvider, AdviceRequest};
use crate::chat_log::{ChatLog, ChatLogError, ChatRecord, FeedbackRecord};
use crate::llm_client::LlmError;
use crate::recommender::Catalog;
use crate::state::AppState;

pub const SAMPLE_CATALOG_CSV: &str = "\
role,skills,interests,style,description,roadmap
Data Scientist,\"Python, SQL, Machine Learning, Statistics\",\"Research, Data, AI\",Independent,Builds predictive models from data,\"Statistics -> Python -> ML projects\"
Web Developer,\"JavaScript, HTML, CSS, React\",\"Design, Web, Startups\",Collaborative,Builds websites and web apps,\"HTML/CSS -> JavaScript -> React\"
Financial Analyst,\"Excel, Accounting, SQL\",\"Finance, Markets\",Structured,Analyses financial performance,
UX Designer,\"Figma, Prototyping, User Research\",\"Design, Psychology\",Collaborative,Designs user experiences,\"Figma -> UX research -> Portfolio\"
";

pub fn sample_catalog() -> Catalog {
    Catalog::from_reader(SAMPLE_CATALOG_CSV.as_bytes()).expect("sample catalog parses")
}

/// A minimal .docx archive whose body holds one `w:p` per paragraph.
/// Paragraph text is inserted as-is, so XML entities must be pre-escaped.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!(r#"<w:p><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}<w:sectPr/></w:body></w:document>"#
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .expect("start docx body");
    writer
        .write_all(document.as_bytes())
        .expect("write docx body");
    writer.finish().expect("finish docx").into_inner()
}

/// Always fails, as if the hosted model were down.
pub struct FailingAdvisor;

#[async_trait]
impl AdviceProvider for FailingAdvisor {
    async fn advise(&self, _request: &AdviceRequest<'_>) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        })
    }
}

/// Replies with a fixed string.
pub struct StaticAdvisor(pub String);

#[async_trait]
impl AdviceProvider for StaticAdvisor {
    async fn advise(&self, _request: &AdviceRequest<'_>) -> Result<String, LlmError> {
        Ok(self.0.clone())
    }
}

/// Captures records in memory; optionally rejects every write.
#[derive(Default)]
pub struct RecordingChatLog {
    pub chats: Mutex<Vec<ChatRecord>>,
    pub feedback: Mutex<Vec<FeedbackRecord>>,
    pub fail: bool,
}

impl RecordingChatLog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl ChatLog for RecordingChatLog {
    async fn log_chat(&self, record: &ChatRecord) -> Result<(), ChatLogError> {
        if self.fail {
            return Err(ChatLogError::Rejected {
                status: 500,
                body: "sheet unavailable".to_string(),
            });
        }
        self.chats.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn log_feedback(&self, record: &FeedbackRecord) -> Result<(), ChatLogError> {
        if self.fail {
            return Err(ChatLogError::Rejected {
                status: 500,
                body: "sheet unavailable".to_string(),
            });
        }
        self.feedback.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub fn test_state(advisor: Arc<dyn AdviceProvider>, chat_log: Arc<RecordingChatLog>) -> AppState {
    AppState {
        catalog: Arc::new(sample_catalog()),
        advisor,
        chat_log,
    }
}
