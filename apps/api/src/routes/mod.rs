pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::writing::handlers as writing;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/requirements", post(resume::handle_requirements))
        .route("/api/v1/resume/structure", post(resume::handle_structure))
        .route("/api/v1/resume/match", post(resume::handle_match))
        .route("/api/v1/resume/optimize", post(resume::handle_optimize))
        // Interview API
        .route("/api/v1/interview/questions", post(interview::handle_questions))
        .route("/api/v1/interview/tips", post(interview::handle_tips))
        .route("/api/v1/interview/feedback", post(interview::handle_feedback))
        // Documents API
        .route(
            "/api/v1/documents/cover-letter",
            post(writing::handle_cover_letter),
        )
        .route(
            "/api/v1/documents/personal-statement",
            post(writing::handle_personal_statement),
        )
        .with_state(state)
}
