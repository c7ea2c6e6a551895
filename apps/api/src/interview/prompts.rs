// Prompt constants for interview preparation.

pub const QUESTIONS_SYSTEM: &str = "You are an experienced interviewer who has hired \
    for this kind of role many times. You write specific, realistic questions.";

/// Replace: {job_title}, {company_line}, {job_description}, {resume_section},
///          {technical}, {behavioral}, {situational}, {role_specific}, {culture_fit}
pub const QUESTIONS_TEMPLATE: &str = r#"Prepare interview questions for a {job_title} candidate.{company_line}

Return a JSON object with this EXACT schema:
{
  "technical_questions": ["{technical} questions on the skills the role needs"],
  "behavioral_questions": ["{behavioral} questions about past behavior"],
  "situational_questions": ["{situational} hypothetical scenarios"],
  "role_specific_questions": ["{role_specific} questions about this role's day-to-day"],
  "culture_fit_questions": ["{culture_fit} questions about values and ways of working"]
}

Each entry is one complete question. Do not number them.

JOB DESCRIPTION:
{job_description}
{resume_section}"#;

/// Replace: {resume_text}
pub const RESUME_SECTION_TEMPLATE: &str = r#"
CANDIDATE RESUME (tailor questions to this background):
{resume_text}
"#;

pub const TIP_SYSTEM: &str = "You are an interview coach. You give candidates \
    concrete, honest advice on how to answer a single question well.";

/// Replace: {job_title}, {question}, {resume_section}
pub const TIP_TEMPLATE: &str = r#"Coach a {job_title} candidate on how to answer this interview question.

Return a JSON object with this EXACT schema:
{
  "question": "the question, repeated verbatim",
  "key_points": ["3-5 points a strong answer covers"],
  "sample_answer": "a concise first-person sample answer (under 150 words)",
  "pitfalls": ["2-3 common mistakes to avoid"]
}
{resume_section}
QUESTION:
{question}"#;

pub const SIMULATION_SYSTEM: &str = "You are a senior interviewer evaluating a mock \
    interview. You are candid and constructive and you score consistently.";

/// Replace: {job_title}, {job_description_section}, {answers_json}
pub const SIMULATION_TEMPLATE: &str = r#"Evaluate this mock interview for a {job_title} position.
{job_description_section}
Return a JSON object with this EXACT schema:
{
  "answer_feedback": [
    {
      "question": "",
      "answer": "",
      "score": 7,
      "strengths": [""],
      "improvements": [""],
      "feedback": "two or three sentences"
    }
  ],
  "overall": {
    "score": 7,
    "summary": "",
    "strengths": [""],
    "areas_for_improvement": [""]
  }
}

Give one answer_feedback entry per question, in order. Scores are 1 to 10.
An empty answer scores 1.

QUESTIONS AND ANSWERS:
{answers_json}"#;

/// Replace: {job_description}
pub const JOB_DESCRIPTION_SECTION_TEMPLATE: &str = r#"
JOB DESCRIPTION:
{job_description}
"#;
