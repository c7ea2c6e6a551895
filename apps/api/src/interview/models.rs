//! Interview records, task inputs, and their schemas.

use serde::{Deserialize, Serialize};

use crate::pipeline::{Field, Rejection, Schema, StructuredOutput};

// ────────────────────────────────────────────────────────────────────────────
// Schemas
// ────────────────────────────────────────────────────────────────────────────

pub static INTERVIEW_QUESTIONS_SCHEMA: Schema = Schema {
    name: "interview_questions",
    fields: &[
        Field::text_list("technical_questions")
            .aliases(&["technical"])
            .headings(&["technical questions", "technical"]),
        Field::text_list("behavioral_questions")
            .aliases(&["behavioural_questions", "behavioral"])
            .headings(&["behavioral questions", "behavioural questions", "behavioral"]),
        Field::text_list("situational_questions")
            .aliases(&["situational"])
            .headings(&["situational questions", "situational"]),
        Field::text_list("role_specific_questions")
            .aliases(&["role_specific"])
            .headings(&["role-specific questions", "role specific questions"]),
        Field::text_list("culture_fit_questions")
            .aliases(&["culture_fit", "cultural_fit_questions"])
            .headings(&["culture fit questions", "culture-fit questions", "culture fit"]),
    ],
};

pub static ANSWER_TIP_SCHEMA: Schema = Schema {
    name: "answer_tip",
    fields: &[
        Field::text("question"),
        Field::text_list("key_points")
            .aliases(&["key_talking_points", "talking_points", "tips"])
            .headings(&["key points", "talking points"]),
        Field::text("sample_answer")
            .aliases(&["example_answer", "sample_response"])
            .headings(&["sample answer", "example answer"]),
        Field::text_list("pitfalls")
            .aliases(&["mistakes_to_avoid", "common_mistakes"])
            .headings(&["pitfalls", "mistakes to avoid", "common mistakes"]),
    ],
};

pub static ANSWER_FEEDBACK_SCHEMA: Schema = Schema {
    name: "answer_feedback",
    fields: &[
        Field::text("question"),
        Field::text("answer"),
        Field::number("score").aliases(&["rating"]),
        Field::text_list("strengths"),
        Field::text_list("improvements").aliases(&["areas_for_improvement", "weaknesses"]),
        Field::text("feedback").aliases(&["comments"]),
    ],
};

pub static OVERALL_EVALUATION_SCHEMA: Schema = Schema {
    name: "overall_evaluation",
    fields: &[
        Field::number("score").aliases(&["overall_score", "rating"]),
        Field::text("summary").aliases(&["comments"]),
        Field::text_list("strengths"),
        Field::text_list("areas_for_improvement").aliases(&["improvements", "weaknesses"]),
    ],
};

pub static SIMULATION_FEEDBACK_SCHEMA: Schema = Schema {
    name: "simulation_feedback",
    fields: &[
        Field::records("answer_feedback", &ANSWER_FEEDBACK_SCHEMA, None)
            .aliases(&["per_answer_feedback", "answers", "question_feedback"]),
        Field::object("overall", &OVERALL_EVALUATION_SCHEMA)
            .aliases(&["overall_evaluation", "overall_feedback"]),
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestionSet {
    pub technical_questions: Vec<String>,
    pub behavioral_questions: Vec<String>,
    pub situational_questions: Vec<String>,
    pub role_specific_questions: Vec<String>,
    pub culture_fit_questions: Vec<String>,
}

impl InterviewQuestionSet {
    pub fn total(&self) -> usize {
        self.technical_questions.len()
            + self.behavioral_questions.len()
            + self.situational_questions.len()
            + self.role_specific_questions.len()
            + self.culture_fit_questions.len()
    }
}

impl StructuredOutput for InterviewQuestionSet {
    fn schema() -> &'static Schema {
        &INTERVIEW_QUESTIONS_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if self.total() == 0 {
            return Err(Rejection::empty("every question category is empty"));
        }
        Ok(())
    }
}

/// Coaching for one interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerTip {
    pub question: String,
    pub key_points: Vec<String>,
    pub sample_answer: String,
    pub pitfalls: Vec<String>,
}

impl StructuredOutput for AnswerTip {
    fn schema() -> &'static Schema {
        &ANSWER_TIP_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if self.key_points.is_empty() && self.sample_answer.trim().is_empty() {
            return Err(Rejection::empty("tip has neither key points nor a sample answer"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub question: String,
    pub answer: String,
    /// 1–10.
    pub score: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallEvaluation {
    /// 1–10.
    pub score: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
}

/// Evaluation of a mock interview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationFeedback {
    pub answer_feedback: Vec<AnswerFeedback>,
    pub overall: OverallEvaluation,
}

impl StructuredOutput for SimulationFeedback {
    fn schema() -> &'static Schema {
        &SIMULATION_FEEDBACK_SCHEMA
    }

    fn check_usable(&self) -> Result<(), Rejection> {
        if self.answer_feedback.is_empty() {
            return Err(Rejection::empty("no per-answer feedback was produced"));
        }
        if self.overall.score <= 0.0 {
            return Err(Rejection::empty("overall evaluation has no score"));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Task inputs
// ────────────────────────────────────────────────────────────────────────────

/// How many questions to ask for in each category.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuestionCounts {
    pub technical: u8,
    pub behavioral: u8,
    pub situational: u8,
    pub role_specific: u8,
    pub culture_fit: u8,
}

impl Default for QuestionCounts {
    fn default() -> Self {
        Self {
            technical: 5,
            behavioral: 3,
            situational: 3,
            role_specific: 3,
            culture_fit: 2,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionParams {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub company_name: Option<String>,
    /// When present, questions probe the candidate's own experience.
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub counts: QuestionCounts,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipParams {
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub resume_text: Option<String>,
}

/// One question and the candidate's answer from a mock session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationParams {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub answers: Vec<QaPair>,
}
