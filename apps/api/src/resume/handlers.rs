//! Axum route handlers for resume upload.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::{extract_skills, extract_text};
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub resume_text: String,
    /// Comma-separated skills to prefill the profile with.
    pub skills: String,
    /// Interests are not extracted from resumes; always empty.
    pub interests: String,
}

/// POST /api/v1/resume
///
/// Accepts a multipart upload with a PDF or DOCX in the `file` field and returns its
/// text plus the known skills found in it.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        // Document parsing is CPU-bound; keep it off the async workers.
        let resume_text =
            tokio::task::spawn_blocking(move || extract_text(&content_type, &data))
                .await
                .map_err(|e| AppError::Internal(e.into()))??;

        let skills = extract_skills(&resume_text, &state.catalog);
        info!(
            "Resume processed: {} chars, {} skills found",
            resume_text.len(),
            skills.len()
        );

        return Ok(Json(ResumeUploadResponse {
            resume_text,
            skills: skills.join(", "),
            interests: String::new(),
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}
