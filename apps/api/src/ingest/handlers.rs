//! Axum route handlers for resume uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub scan_id: Uuid,
    pub score: u32,
    pub top_issues: Vec<String>,
    pub resume_text: String,
    pub analyzed_at: DateTime<Utc>,
}

struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

/// POST /api/v1/upload
///
/// Multipart form with a `resume` file and a `jobDescription` text field.
/// Extracts the resume text and returns a quick scan of it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut resume: Option<UploadedFile> = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                resume = Some(UploadedFile { file_name, bytes });
            }
            "jobDescription" => job_description = field.text().await?,
            _ => {}
        }
    }

    let resume = match resume {
        Some(file) if !file.bytes.is_empty() => file,
        _ => {
            return Err(AppError::Validation(
                "Resume file and job description are required".to_string(),
            ))
        }
    };
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume file and job description are required".to_string(),
        ));
    }

    let resume_text = state
        .extractor
        .extract(&resume.file_name, resume.bytes)
        .await?;
    let scan = state.engine.quick_scan(&resume_text, &job_description)?;

    let scan_id = Uuid::new_v4();
    info!(
        %scan_id,
        file_name = %resume.file_name,
        score = scan.score,
        "Resume upload scanned"
    );

    Ok(Json(UploadResponse {
        scan_id,
        score: scan.score,
        top_issues: scan.top_issues,
        resume_text,
        analyzed_at: Utc::now(),
    }))
}
