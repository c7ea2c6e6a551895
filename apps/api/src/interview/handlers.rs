//! Axum route handlers for the interview API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::interview::models::{
    AnswerTip, InterviewQuestionSet, QuestionParams, SimulationFeedback, SimulationParams,
    TipParams,
};
use crate::interview::service;
use crate::state::AppState;

/// Upper bound on questions per tips request.
pub const MAX_TIP_QUESTIONS: usize = 20;

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<AnswerTip>,
}

/// POST /api/v1/interview/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    Json(params): Json<QuestionParams>,
) -> Result<Json<InterviewQuestionSet>, AppError> {
    let questions = service::generate_questions(&state.pipeline, &params).await?;
    Ok(Json(questions))
}

/// POST /api/v1/interview/tips
///
/// One completion per question, run through a bounded worker pool.
pub async fn handle_tips(
    State(state): State<AppState>,
    Json(params): Json<TipParams>,
) -> Result<Json<TipsResponse>, AppError> {
    if params.questions.len() > MAX_TIP_QUESTIONS {
        return Err(AppError::Validation(format!(
            "at most {MAX_TIP_QUESTIONS} questions per request"
        )));
    }

    let tips =
        service::generate_answer_tips(&state.pipeline, &params, state.config.tip_concurrency)
            .await?;
    Ok(Json(TipsResponse { tips }))
}

/// POST /api/v1/interview/feedback
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(params): Json<SimulationParams>,
) -> Result<Json<SimulationFeedback>, AppError> {
    let feedback = service::evaluate_simulation(&state.pipeline, &params).await?;
    Ok(Json(feedback))
}
