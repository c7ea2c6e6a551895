// Prompt constants for the resume tasks.
// Cross-cutting fragments (JSON-only, grounding) live in llm_client::prompts.

/// Persona for job-description analysis.
pub const JOB_REQUIREMENTS_SYSTEM: &str = "You are an expert technical recruiter. \
    You read job descriptions and separate hard requirements from nice-to-haves.";

/// Replace: {job_description}
pub const JOB_REQUIREMENTS_TEMPLATE: &str = r#"Extract the requirements from the job description below.

Return a JSON object with this EXACT schema:
{
  "required_skills": ["skills, tools or qualifications the posting says are required"],
  "preferred_skills": ["skills described as preferred, a plus, or nice to have"],
  "experience_level": "entry | mid | senior | lead | executive, with years if stated",
  "education_requirements": ["degrees or certifications mentioned"],
  "job_responsibilities": ["the main duties of the role"]
}

Use short phrases, not sentences. Use an empty array when the posting says nothing.

JOB DESCRIPTION:
{job_description}"#;

/// Persona for resume parsing.
pub const STRUCTURE_RESUME_SYSTEM: &str = "You are a meticulous resume parser. \
    You convert resumes into structured data without rewording them.";

/// Replace: {grounding_instruction}, {resume_text}
pub const STRUCTURE_RESUME_TEMPLATE: &str = r#"{grounding_instruction}

Convert the resume below into a JSON object with this EXACT schema:
{
  "summary": "the professional summary, verbatim if present",
  "work_experience": [
    {"company": "", "title": "", "dates": "", "accomplishments": ["one entry per bullet"]}
  ],
  "technical_skills": ["one skill per entry"],
  "education": [
    {"institution": "", "degree": "", "dates": "", "details": ["honors, coursework"]}
  ],
  "certifications": ["certification names"],
  "projects": [
    {"name": "", "description": "", "technologies": [""]}
  ]
}

Keep the original wording of every bullet. List roles most recent first.

RESUME:
{resume_text}"#;

/// Persona for match scoring.
pub const MATCH_SYSTEM: &str = "You are a hiring manager scoring how well a candidate \
    fits a role. You are strict, specific and fair.";

/// Replace: {grounding_instruction}, {requirements_section}, {resume_text}, {job_description}
pub const MATCH_TEMPLATE: &str = r#"{grounding_instruction}

Score how well the resume matches the job description.

Return a JSON object with this EXACT schema:
{
  "match_score": 0,
  "matched_skills": ["skills from the posting the resume demonstrates"],
  "missing_skills": ["skills from the posting the resume lacks"],
  "strengths": ["specific reasons the candidate is a good fit"],
  "recommendations": ["concrete changes that would raise the score"]
}

match_score is a number from 0 to 100.
{requirements_section}
RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// Persona for resume tailoring.
pub const OPTIMIZE_SYSTEM: &str = "You are an expert resume writer who tailors resumes \
    to a specific job without inventing experience.";

/// Replace: {grounding_instruction}, {requirements_section}, {resume_text}, {job_description}
pub const OPTIMIZE_TEMPLATE: &str = r#"{grounding_instruction}

Rewrite the resume so it targets the job description below. Reorder and reword
bullets to surface relevant experience, mirror the posting's terminology where the
resume supports it, and tighten the summary.

After your rationale, output one JSON object with this EXACT schema:
{
  "summary": "",
  "work_experience": [
    {"company": "", "title": "", "dates": "", "accomplishments": [""]}
  ],
  "technical_skills": [""],
  "education": [
    {"institution": "", "degree": "", "dates": "", "details": [""]}
  ],
  "certifications": [""],
  "projects": [
    {"name": "", "description": "", "technologies": [""]}
  ],
  "optimization_notes": ["each change you made and why"]
}
{requirements_section}
RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}"#;

/// Inserted into match and optimize prompts when requirements were already extracted.
/// Replace: {requirements_json}
pub const REQUIREMENTS_SECTION_TEMPLATE: &str = r#"
EXTRACTED REQUIREMENTS (prioritize these):
{requirements_json}
"#;
