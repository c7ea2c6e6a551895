// Prompt constants for long-form documents.

pub const COVER_LETTER_SYSTEM: &str = "You are a career coach who writes concise, \
    specific cover letters that sound like the candidate, not a template.";

/// Replace: {grounding_instruction}, {salutation}, {company}, {tone_guidance},
///          {resume_text}, {job_description}
pub const COVER_LETTER_TEMPLATE: &str = r#"{grounding_instruction}

Write a cover letter for {company}.

Structure:
- Open with "{salutation}" on its own line.
- Paragraph 1: the role and one sentence on why this candidate fits.
- Paragraphs 2-3: two or three accomplishments from the resume that map to the job's needs.
- Closing paragraph: interest in next steps. Sign off with the candidate's name if it appears in the resume.

Keep it under 400 words.
TONE: {tone_guidance}

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

pub const PERSONAL_STATEMENT_SYSTEM: &str = "You are an admissions consultant who helps \
    applicants tell their own story clearly and honestly.";

/// Replace: {grounding_instruction}, {program}, {word_limit}, {prompt_section}, {resume_text}
pub const PERSONAL_STATEMENT_TEMPLATE: &str = r#"{grounding_instruction}

Write a personal statement for an application to {program}.
Stay under {word_limit} words. Use first person. Build a narrative around two or three
experiences from the background below rather than listing everything.
{prompt_section}
BACKGROUND:
{resume_text}"#;

/// Replace: {statement_prompt}
pub const STATEMENT_PROMPT_SECTION_TEMPLATE: &str = r#"
Answer this prompt directly:
{statement_prompt}
"#;
