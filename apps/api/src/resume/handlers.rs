//! Axum route handlers for the resume API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::models::{JobRequirements, MatchAnalysis, OptimizedResume, StructuredResume};
use crate::resume::service;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

// Missing fields deserialize as empty so the task reports which input is
// required instead of a generic body rejection.

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeAgainstJobRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    /// Output of `/resume/requirements`, when the client already has it.
    #[serde(default)]
    pub requirements: Option<JobRequirements>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/requirements
pub async fn handle_requirements(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JobRequirements>, AppError> {
    let requirements =
        service::extract_job_requirements(&state.pipeline, &request.job_description).await?;
    Ok(Json(requirements))
}

/// POST /api/v1/resume/structure
pub async fn handle_structure(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Result<Json<StructuredResume>, AppError> {
    let resume = service::structure_resume(&state.pipeline, &request.resume_text).await?;
    Ok(Json(resume))
}

/// POST /api/v1/resume/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<ResumeAgainstJobRequest>,
) -> Result<Json<MatchAnalysis>, AppError> {
    let analysis = service::score_resume_match(
        &state.pipeline,
        &request.resume_text,
        &request.job_description,
        request.requirements.as_ref(),
    )
    .await?;
    Ok(Json(analysis))
}

/// POST /api/v1/resume/optimize
///
/// Rewrites the resume for the posting. The model explains its changes in prose
/// before the JSON block; only the block is returned.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<ResumeAgainstJobRequest>,
) -> Result<Json<OptimizedResume>, AppError> {
    let optimized = service::optimize_resume(
        &state.pipeline,
        &request.resume_text,
        &request.job_description,
        request.requirements.as_ref(),
    )
    .await?;
    Ok(Json(optimized))
}
