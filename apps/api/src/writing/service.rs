//! Free-text documents: cover letters and personal statements.
//!
//! These skip decoding entirely; the pipeline only sanitizes the text and
//! rejects blank output.

use tracing::{info, warn};

use crate::llm_client::prompts::{fill, GROUNDING_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::CompletionRequest;
use crate::pipeline::{required, ClassifiedError, Pipeline};
use crate::writing::models::{CoverLetterParams, GeneratedDocument, PersonalStatementParams};
use crate::writing::prompts::{
    COVER_LETTER_SYSTEM, COVER_LETTER_TEMPLATE, PERSONAL_STATEMENT_SYSTEM,
    PERSONAL_STATEMENT_TEMPLATE, STATEMENT_PROMPT_SECTION_TEMPLATE,
};

const GENERATION_TEMPERATURE: f32 = 0.7;
const MIN_STATEMENT_WORDS: u32 = 100;
const MAX_STATEMENT_WORDS: u32 = 2000;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn plain_system(persona: &str) -> String {
    format!("{persona} {PLAIN_TEXT_INSTRUCTION}")
}

pub fn build_cover_letter_request(
    params: &CoverLetterParams,
) -> Result<CompletionRequest, ClassifiedError> {
    let resume_text = required("resume_text", &params.resume_text)?;
    let job_description = required("job_description", &params.job_description)?;
    let company = non_blank(params.company_name.as_deref()).unwrap_or("the company in the job description");
    let salutation = non_blank(params.hiring_manager.as_deref())
        .map(|name| format!("Dear {name},"))
        .unwrap_or_else(|| "Dear Hiring Manager,".to_string());

    let user = fill(
        COVER_LETTER_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("salutation", &salutation),
            ("company", company),
            ("tone_guidance", params.tone.guidance()),
            ("resume_text", resume_text),
            ("job_description", job_description),
        ],
    );

    Ok(CompletionRequest::new("cover_letter", plain_system(COVER_LETTER_SYSTEM), user)
        .with_temperature(GENERATION_TEMPERATURE)
        .with_max_tokens(1200))
}

pub fn build_personal_statement_request(
    params: &PersonalStatementParams,
) -> Result<CompletionRequest, ClassifiedError> {
    let resume_text = required("resume_text", &params.resume_text)?;
    let program = required("program", &params.program)?;
    let prompt_section = non_blank(params.statement_prompt.as_deref())
        .map(|p| fill(STATEMENT_PROMPT_SECTION_TEMPLATE, &[("statement_prompt", p)]))
        .unwrap_or_default();
    let word_limit = params
        .word_limit
        .clamp(MIN_STATEMENT_WORDS, MAX_STATEMENT_WORDS);

    let user = fill(
        PERSONAL_STATEMENT_TEMPLATE,
        &[
            ("grounding_instruction", GROUNDING_INSTRUCTION),
            ("program", program),
            ("word_limit", &word_limit.to_string()),
            ("prompt_section", &prompt_section),
            ("resume_text", resume_text),
        ],
    );

    Ok(CompletionRequest::new(
        "personal_statement",
        plain_system(PERSONAL_STATEMENT_SYSTEM),
        user,
    )
    .with_temperature(GENERATION_TEMPERATURE)
    .with_max_tokens(word_limit.saturating_mul(2).clamp(600, 4000)))
}

async fn generate(
    pipeline: &Pipeline,
    request: CompletionRequest,
) -> Result<GeneratedDocument, ClassifiedError> {
    let task = request.task();
    let text = pipeline.run_text(request).await?;
    let document = GeneratedDocument::new(text.content, text.truncated);
    if document.truncated {
        warn!(task, words = document.word_count, "Returning truncated document");
    }
    info!(task, words = document.word_count, "Generated document");
    Ok(document)
}

pub async fn generate_cover_letter(
    pipeline: &Pipeline,
    params: &CoverLetterParams,
) -> Result<GeneratedDocument, ClassifiedError> {
    generate(pipeline, build_cover_letter_request(params)?).await
}

pub async fn generate_personal_statement(
    pipeline: &Pipeline,
    params: &PersonalStatementParams,
) -> Result<GeneratedDocument, ClassifiedError> {
    generate(pipeline, build_personal_statement_request(params)?).await
}
