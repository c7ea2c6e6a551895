use serde::{Deserialize, Serialize};

/// Register for generated letters. Drives the phrasing guidance in the prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Enthusiastic,
    Conversational,
    Formal,
}

impl Tone {
    pub fn guidance(self) -> &'static str {
        match self {
            Tone::Professional => {
                "Confident and polished. Plain verbs, no superlatives, no exclamation marks."
            }
            Tone::Enthusiastic => {
                "Warm and energetic. Show genuine excitement about the mission, \
                 but back every claim with evidence from the resume."
            }
            Tone::Conversational => {
                "Natural and direct, as if written to a colleague. Contractions are fine; \
                 slang is not."
            }
            Tone::Formal => {
                "Traditional business correspondence. No contractions, measured sentences."
            }
        }
    }
}

/// A free-text document produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDocument {
    pub content: String,
    /// The model hit its token limit; the last paragraph may be cut short.
    pub truncated: bool,
    pub word_count: usize,
}

impl GeneratedDocument {
    pub fn new(content: String, truncated: bool) -> Self {
        let word_count = content.split_whitespace().count();
        Self {
            content,
            truncated,
            word_count,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverLetterParams {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub hiring_manager: Option<String>,
    #[serde(default)]
    pub tone: Tone,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalStatementParams {
    #[serde(default)]
    pub resume_text: String,
    /// Program or scholarship the statement is for.
    #[serde(default)]
    pub program: String,
    /// The prompt the institution asks applicants to answer, if any.
    #[serde(default)]
    pub statement_prompt: Option<String>,
    #[serde(default = "default_word_limit")]
    pub word_limit: u32,
}

fn default_word_limit() -> u32 {
    650
}
