//! Axum route handlers for the scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::scoring::engine::DetailedAnalysis;
use crate::scoring::keywords::ScoreResult;
use crate::state::AppState;

/// Absent and `null` fields are both treated as missing input by the engine.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
}

impl ScoreRequest {
    fn resume_text(&self) -> &str {
        self.resume_text.as_deref().unwrap_or_default()
    }

    fn job_description(&self) -> &str {
        self.job_description.as_deref().unwrap_or_default()
    }
}

/// POST /api/v1/ats-score
///
/// Keyword overlap between the resume and the job description.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResult>, AppError> {
    let Json(request) = payload?;
    let result = state
        .engine
        .score_resume_against_job(request.resume_text(), request.job_description())?;

    info!(
        score = result.score,
        matched = result.matched_keywords.len(),
        job_keywords = result.total_job_keywords,
        "Resume scored"
    );
    Ok(Json(result))
}

/// POST /api/v1/detailed-analysis
///
/// Keyword score plus formatting, section and action-verb checks and recommendations.
pub async fn handle_detailed_analysis(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<DetailedAnalysis>, AppError> {
    let Json(request) = payload?;
    let analysis = state
        .engine
        .detailed_analysis(request.resume_text(), request.job_description())?;

    info!(
        score = analysis.basic.score,
        overall_health = analysis.overall_health,
        recommendations = analysis.recommendations.len(),
        "Detailed analysis complete"
    );
    Ok(Json(analysis))
}
