//! Resume tasks: requirement extraction, structuring, match scoring, optimization.
//!
//! Each task is split into a pure `build_*_request` (input checks + prompt) and
//! an async function that hands the request to the pipeline.

use tracing::info;

use crate::llm_client::prompts::{
    embed_json, fill, EMBEDDED_JSON_INSTRUCTION, GROUNDING_INSTRUCTION, JSON_ONLY_INSTRUCTION,
};
use crate::llm_client::{CompletionRequest, OutputMode};
use crate::pipeline::{required, ClassifiedError, Pipeline};
use crate::resume::models::{JobRequirements, MatchAnalysis, OptimizedResume, StructuredResume};
use crate::resume::prompts::{
    JOB_REQUIREMENTS_SYSTEM, JOB_REQUIREMENTS_TEMPLATE, MATCH_SYSTEM, MATCH_TEMPLATE,
    OPTIMIZE_SYSTEM, OPTIMIZE_TEMPLATE, REQUIREMENTS_SECTION_TEMPLATE, STRUCTURE_RESUME_SYSTEM,
    STRUCTURE_RESUME_TEMPLATE,
};

const EXTRACTION_TEMPERATURE: f32 = 0.2;
const GENERATION_TEMPERATURE: f32 = 0.7;

fn json_system(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_INSTRUCTION}")
}

fn requirements_section(requirements: Option<&JobRequirements>) -> String {
    requirements
        .map(|r| fill(REQUIREMENTS_SECTION_TEMPLATE, &[("requirements_json", &embed_json(r))]))
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Request builders
// ────────────────────────────────────────────────────────────────────────────

pub fn build_job_requirements_request(
    job_description: &str,
) -> Result<CompletionRequest, ClassifiedError> {
    let job_description = required("job_description", job_description)?;
    let user = fill(JOB_REQUIREMENTS_TEMPLATE, &[("job_description", job_description)]);

    Ok(
        CompletionRequest::new("job_requirements", json_system(JOB_REQUIREMENTS_SYSTEM), user)
            .with_temperature(EXTRACTION_TEMPERATURE)
            .with_output_mode(OutputMode::Json)
            .with_max_tokens(1500),
    )
}

pub fn build_structure_resume_request(
    resume_text: &str,
) -> Result<CompletionRequest, ClassifiedError> {
    let resume_text = required("resume_text", resume_text)?;
    let user = fill(
        STRUCTURE_RESUME_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("resume_text", resume_text),
        ],
    );

    Ok(
        CompletionRequest::new("structure_resume", json_system(STRUCTURE_RESUME_SYSTEM), user)
            .with_temperature(EXTRACTION_TEMPERATURE)
            .with_output_mode(OutputMode::Json)
            .with_max_tokens(4000),
    )
}

pub fn build_match_request(
    resume_text: &str,
    job_description: &str,
    requirements: Option<&JobRequirements>,
) -> Result<CompletionRequest, ClassifiedError> {
    let resume_text = required("resume_text", resume_text)?;
    let job_description = required("job_description", job_description)?;
    let section = requirements_section(requirements);
    let user = fill(
        MATCH_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("requirements_section", &section),
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    );

    Ok(CompletionRequest::new("match_analysis", json_system(MATCH_SYSTEM), user)
        .with_temperature(EXTRACTION_TEMPERATURE)
        .with_output_mode(OutputMode::Json)
        .with_max_tokens(1500))
}

pub fn build_optimize_request(
    resume_text: &str,
    job_description: &str,
    requirements: Option<&JobRequirements>,
) -> Result<CompletionRequest, ClassifiedError> {
    let resume_text = required("resume_text", resume_text)?;
    let job_description = required("job_description", job_description)?;
    let section = requirements_section(requirements);
    let user = fill(
        OPTIMIZE_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("requirements_section", &section),
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    );

    Ok(CompletionRequest::new(
        "optimize_resume",
        format!("{OPTIMIZE_SYSTEM} {EMBEDDED_JSON_INSTRUCTION}"),
        user,
    )
    .with_temperature(GENERATION_TEMPERATURE)
    .with_output_mode(OutputMode::EmbeddedJson)
    .with_max_tokens(4000))
}

// ────────────────────────────────────────────────────────────────────────────
// Tasks
// ────────────────────────────────────────────────────────────────────────────

pub async fn extract_job_requirements(
    pipeline: &Pipeline,
    job_description: &str,
) -> Result<JobRequirements, ClassifiedError> {
    let request = build_job_requirements_request(job_description)?;
    let requirements: JobRequirements = pipeline.run(request).await?;
    info!(
        required = requirements.required_skills.len(),
        preferred = requirements.preferred_skills.len(),
        "Extracted job requirements"
    );
    Ok(requirements)
}

pub async fn structure_resume(
    pipeline: &Pipeline,
    resume_text: &str,
) -> Result<StructuredResume, ClassifiedError> {
    let request = build_structure_resume_request(resume_text)?;
    let resume: StructuredResume = pipeline.run(request).await?;
    info!(
        roles = resume.work_experience.len(),
        skills = resume.technical_skills.len(),
        "Structured resume"
    );
    Ok(resume)
}

pub async fn score_resume_match(
    pipeline: &Pipeline,
    resume_text: &str,
    job_description: &str,
    requirements: Option<&JobRequirements>,
) -> Result<MatchAnalysis, ClassifiedError> {
    let request = build_match_request(resume_text, job_description, requirements)?;
    let analysis: MatchAnalysis = pipeline.run(request).await?;
    info!(score = analysis.match_score, "Scored resume match");
    Ok(analysis)
}

pub async fn optimize_resume(
    pipeline: &Pipeline,
    resume_text: &str,
    job_description: &str,
    requirements: Option<&JobRequirements>,
) -> Result<OptimizedResume, ClassifiedError> {
    let request = build_optimize_request(resume_text, job_description, requirements)?;
    let optimized: OptimizedResume = pipeline.run(request).await?;
    info!(
        notes = optimized.optimization_notes.len(),
        "Optimized resume"
    );
    Ok(optimized)
}
