/// LLM Client — the seam between the career services and the completion service.
///
/// ARCHITECTURAL RULE: No other module may call the completion API directly.
/// Services build a `CompletionRequest` and hand it to the pipeline, which talks
/// to whatever `CompletionService` was injected at startup.
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod client;
pub mod prompts;
#[cfg(test)]
pub mod testing;

pub use client::LlmClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },
}

/// How the model is told to shape its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Free text (cover letters, personal statements).
    Plain,
    /// A single JSON object; the provider is asked to enforce it.
    Json,
    /// Prose that contains one JSON block somewhere inside it.
    EmbeddedJson,
}

/// One request to the completion service. Built per invocation and never mutated
/// after it is handed to the pipeline. Without a model override the client's
/// configured model is used.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    task: &'static str,
    model: Option<String>,
    system: String,
    user: String,
    temperature: f32,
    output_mode: OutputMode,
    max_tokens: u32,
    timeout: Option<Duration>,
}

impl CompletionRequest {
    pub fn new(task: &'static str, system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            task,
            model: None,
            system: system.into(),
            user: user.into(),
            temperature: 0.7,
            output_mode: OutputMode::Plain,
            max_tokens: 2000,
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_output_mode(mut self, output_mode: OutputMode) -> Self {
        self.output_mode = output_mode;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Short task label used in logs (e.g. `"interview_questions"`).
    pub fn task(&self) -> &'static str {
        self.task
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// Why the model stopped producing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    /// Output hit the token budget; the text is probably cut mid-structure.
    Length,
    Other(String),
}

impl FinishReason {
    pub fn from_wire(reason: Option<&str>) -> Self {
        match reason {
            None | Some("stop") => FinishReason::Stop,
            Some("length") => FinishReason::Length,
            Some(other) => FinishReason::Other(other.to_string()),
        }
    }
}

/// What came back from one completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionResult {
    pub text: Option<String>,
    pub finish_reason: FinishReason,
}

/// A black-box text-completion service.
///
/// Carried in `AppState` (inside the pipeline) as `Arc<dyn CompletionService>` so
/// tests can script responses without a network.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult, LlmError>;
}
