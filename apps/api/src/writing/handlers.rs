//! Axum route handlers for document generation.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::state::AppState;
use crate::writing::models::{CoverLetterParams, GeneratedDocument, PersonalStatementParams};
use crate::writing::service;

/// POST /api/v1/documents/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(params): Json<CoverLetterParams>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let document = service::generate_cover_letter(&state.pipeline, &params).await?;
    Ok(Json(document))
}

/// POST /api/v1/documents/personal-statement
pub async fn handle_personal_statement(
    State(state): State<AppState>,
    Json(params): Json<PersonalStatementParams>,
) -> Result<Json<GeneratedDocument>, AppError> {
    let document = service::generate_personal_statement(&state.pipeline, &params).await?;
    Ok(Json(document))
}
