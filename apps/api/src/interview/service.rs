//! Interview tasks: question generation, per-question answer tips, and mock
//! interview evaluation.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::interview::models::{
    AnswerTip, InterviewQuestionSet, QuestionParams, SimulationFeedback, SimulationParams,
    TipParams,
};
use crate::interview::prompts::{
    JOB_DESCRIPTION_SECTION_TEMPLATE, QUESTIONS_SYSTEM, QUESTIONS_TEMPLATE,
    RESUME_SECTION_TEMPLATE, SIMULATION_SYSTEM, SIMULATION_TEMPLATE, TIP_SYSTEM, TIP_TEMPLATE,
};
use crate::llm_client::prompts::{embed_json, fill, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{CompletionRequest, OutputMode};
use crate::pipeline::{required, ClassifiedError, Pipeline, Stage};

const SCORING_TEMPERATURE: f32 = 0.2;
const GENERATION_TEMPERATURE: f32 = 0.7;

/// Per-tip deadline; tips are short and a slow one holds a worker slot.
const TIP_TIMEOUT: Duration = Duration::from_secs(30);

fn json_system(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_INSTRUCTION}")
}

fn resume_section(resume_text: Option<&str>) -> String {
    match resume_text.map(str::trim) {
        Some(text) if !text.is_empty() => fill(RESUME_SECTION_TEMPLATE, &[("resume_text", text)]),
        _ => String::new(),
    }
}

fn job_title_or_default(job_title: &str) -> &str {
    match job_title.trim() {
        "" => "professional",
        title => title,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request builders
// ────────────────────────────────────────────────────────────────────────────

pub fn build_questions_request(params: &QuestionParams) -> Result<CompletionRequest, ClassifiedError> {
    let job_title = required("job_title", &params.job_title)?;
    let job_description = required("job_description", &params.job_description)?;
    let company_line = params
        .company_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| format!(" The company is {name}."))
        .unwrap_or_default();
    let counts = params.counts;

    let user = fill(
        QUESTIONS_TEMPLATE,
        &[
            ("job_title", job_title),
            ("company_line", &company_line),
            ("job_description", job_description),
            ("resume_section", &resume_section(params.resume_text.as_deref())),
            ("technical", &counts.technical.to_string()),
            ("behavioral", &counts.behavioral.to_string()),
            ("situational", &counts.situational.to_string()),
            ("role_specific", &counts.role_specific.to_string()),
            ("culture_fit", &counts.culture_fit.to_string()),
        ],
    );

    Ok(
        CompletionRequest::new("interview_questions", json_system(QUESTIONS_SYSTEM), user)
            .with_temperature(GENERATION_TEMPERATURE)
            .with_output_mode(OutputMode::Json)
            .with_max_tokens(2000),
    )
}

pub fn build_tip_request(
    question: &str,
    job_title: &str,
    resume_text: Option<&str>,
) -> Result<CompletionRequest, ClassifiedError> {
    let question = required("question", question)?;
    let user = fill(
        TIP_TEMPLATE,
        &[
            ("job_title", job_title_or_default(job_title)),
            ("question", question),
            ("resume_section", &resume_section(resume_text)),
        ],
    );

    Ok(CompletionRequest::new("answer_tip", json_system(TIP_SYSTEM), user)
        .with_temperature(GENERATION_TEMPERATURE)
        .with_output_mode(OutputMode::Json)
        .with_max_tokens(800)
        .with_timeout(TIP_TIMEOUT))
}

pub fn build_simulation_request(
    params: &SimulationParams,
) -> Result<CompletionRequest, ClassifiedError> {
    if params.answers.iter().all(|pair| pair.question.trim().is_empty()) {
        return Err(ClassifiedError::missing_input("answers"));
    }
    let job_description_section = params
        .job_description
        .as_deref()
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| fill(JOB_DESCRIPTION_SECTION_TEMPLATE, &[("job_description", jd)]))
        .unwrap_or_default();

    let user = fill(
        SIMULATION_TEMPLATE,
        &[
            ("job_title", job_title_or_default(&params.job_title)),
            ("job_description_section", &job_description_section),
            ("answers_json", &embed_json(&params.answers)),
        ],
    );

    Ok(
        CompletionRequest::new("simulation_feedback", json_system(SIMULATION_SYSTEM), user)
            .with_temperature(SCORING_TEMPERATURE)
            .with_output_mode(OutputMode::Json)
            .with_max_tokens(3000),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tasks
// ────────────────────────────────────────────────────────────────────────────

pub async fn generate_questions(
    pipeline: &Pipeline,
    params: &QuestionParams,
) -> Result<InterviewQuestionSet, ClassifiedError> {
    let request = build_questions_request(params)?;
    let questions: InterviewQuestionSet = pipeline.run(request).await?;
    info!(total = questions.total(), "Generated interview questions");
    Ok(questions)
}

/// Generates one tip per non-blank question, at most `concurrency` in flight.
///
/// Tips come back in question order. The first failed tip fails the whole call;
/// remaining workers are aborted when the set is dropped.
pub async fn generate_answer_tips(
    pipeline: &Pipeline,
    params: &TipParams,
    concurrency: usize,
) -> Result<Vec<AnswerTip>, ClassifiedError> {
    let questions: Vec<&str> = params
        .questions
        .iter()
        .map(|q| q.trim())
        .filter(|q| !q.is_empty())
        .collect();
    if questions.is_empty() {
        return Err(ClassifiedError::missing_input("questions"));
    }

    let requests = questions
        .iter()
        .map(|q| build_tip_request(q, &params.job_title, params.resume_text.as_deref()))
        .collect::<Result<Vec<_>, _>>()?;

    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut workers = JoinSet::new();

    for (index, (question, request)) in questions.iter().zip(requests).enumerate() {
        let pipeline = pipeline.clone();
        let permits = Arc::clone(&permits);
        let question = question.to_string();

        workers.spawn(async move {
            let _permit = permits.acquire_owned().await.map_err(|_| {
                ClassifiedError::unavailable(Stage::Built, "tip worker pool was closed")
            })?;
            debug!(index, "Generating answer tip");
            let mut tip: AnswerTip = pipeline.run(request).await?;
            if tip.question.trim().is_empty() {
                tip.question = question;
            }
            Ok::<_, ClassifiedError>((index, tip))
        });
    }

    let mut slots: Vec<Option<AnswerTip>> = vec![None; questions.len()];
    while let Some(joined) = workers.join_next().await {
        let (index, tip) = joined.map_err(|e| {
            ClassifiedError::unavailable(Stage::Sent, format!("tip worker failed: {e}"))
        })??;
        slots[index] = Some(tip);
    }

    let tips: Vec<AnswerTip> = slots.into_iter().flatten().collect();
    info!(count = tips.len(), "Generated answer tips");
    Ok(tips)
}

pub async fn evaluate_simulation(
    pipeline: &Pipeline,
    params: &SimulationParams,
) -> Result<SimulationFeedback, ClassifiedError> {
    let request = build_simulation_request(params)?;
    let feedback: SimulationFeedback = pipeline.run(request).await?;
    info!(
        answers = feedback.answer_feedback.len(),
        overall = feedback.overall.score,
        "Evaluated interview simulation"
    );
    Ok(feedback)
}
