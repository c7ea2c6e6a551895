/// Response pipeline — turns raw completion text into validated task records.
///
/// Stages run strictly in order:
///   build → send → sanitize → decode (→ extract on failure) → normalize → validate
///
/// Each stage is a pure function except `send`. Every failure leaves as a
/// `ClassifiedError` tagged with the stage that was being attempted; nothing is
/// retried here (transport retries live in `LlmClient`).
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::llm_client::{CompletionRequest, CompletionService, FinishReason, OutputMode};

pub mod decode;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod sanitize;
pub mod schema;
pub mod validate;

pub use decode::{decode, ParseOutcome};
pub use error::{ClassifiedError, ErrorKind, Stage};
pub use extract::extract_sections;
pub use normalize::normalize;
pub use sanitize::{isolate_json_block, sanitize};
pub use schema::{EntryLayout, Field, Schema};
pub use validate::{validate, Rejection, StructuredOutput};

/// Free-text task output after sanitizing.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedText {
    pub content: String,
    /// The model ran out of tokens; the text likely ends mid-sentence.
    pub truncated: bool,
}

/// Entry point for every task. Holds the injected completion service, or
/// nothing when no credential was configured.
#[derive(Clone)]
pub struct Pipeline {
    service: Option<Arc<dyn CompletionService>>,
}

impl Pipeline {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// A pipeline that answers every request with `UpstreamUnavailable`.
    pub fn unavailable() -> Self {
        Self { service: None }
    }

    pub fn is_available(&self) -> bool {
        self.service.is_some()
    }

    /// Runs a structured task end to end.
    pub async fn run<T: StructuredOutput>(
        &self,
        request: CompletionRequest,
    ) -> Result<T, ClassifiedError> {
        let (raw, _) = self.send(&request).await?;
        interpret(&raw, request.output_mode()).inspect_err(|e| {
            warn!(task = request.task(), stage = %e.stage, kind = %e.kind, "Pipeline rejected response: {}", e.message);
        })
    }

    /// Runs a free-text task: send, sanitize, reject blank output.
    pub async fn run_text(&self, request: CompletionRequest) -> Result<GeneratedText, ClassifiedError> {
        let (raw, truncated) = self.send(&request).await?;
        let content = sanitize(&raw);
        if content.is_empty() {
            return Err(ClassifiedError::new(
                ErrorKind::EmptyResult,
                Stage::Sanitized,
                format!("{} produced only formatting", request.task()),
            )
            .with_excerpt(&raw));
        }
        Ok(GeneratedText { content, truncated })
    }

    /// Built → Sent. Returns the raw text and whether it was cut off.
    async fn send(&self, request: &CompletionRequest) -> Result<(String, bool), ClassifiedError> {
        let Some(service) = &self.service else {
            return Err(ClassifiedError::unavailable(
                Stage::Built,
                "no completion service is configured",
            ));
        };

        debug!(task = request.task(), mode = ?request.output_mode(), "Sending completion request");
        let result = service.complete(request).await.map_err(|e| {
            warn!(task = request.task(), "Completion request failed: {e}");
            ClassifiedError::unavailable(Stage::Sent, e.to_string())
        })?;

        let truncated = result.finish_reason == FinishReason::Length;
        if truncated {
            warn!(task = request.task(), "Completion hit the token limit; output is likely truncated");
        }

        match result.text {
            Some(text) if !text.trim().is_empty() => Ok((text, truncated)),
            _ => Err(ClassifiedError::new(
                ErrorKind::EmptyResponse,
                Stage::Sent,
                format!("{} returned no text", request.task()),
            )),
        }
    }
}

/// Returns `value` trimmed, or `MissingInput` naming `field` when it is blank.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ClassifiedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClassifiedError::missing_input(field));
    }
    Ok(trimmed)
}

/// Sanitized → Decoded → Normalized → Validated for one raw response.
pub fn interpret<T: StructuredOutput>(raw: &str, mode: OutputMode) -> Result<T, ClassifiedError> {
    if raw.trim().is_empty() {
        return Err(ClassifiedError::new(
            ErrorKind::EmptyResponse,
            Stage::Sent,
            "response text is empty",
        ));
    }

    let schema = T::schema();
    let cleaned = sanitize(raw);
    let candidate = match mode {
        OutputMode::EmbeddedJson => isolate_json_block(&cleaned),
        OutputMode::Json | OutputMode::Plain => cleaned.as_str(),
    };

    let decoded = match decode(candidate, true) {
        ParseOutcome::Parsed(value) => value,
        ParseOutcome::Failed(failure) => {
            warn!(
                schema = schema.name,
                "Strict decode failed ({}); trying section extraction",
                failure.reason
            );
            debug!(schema = schema.name, excerpt = %failure.excerpt, "Undecodable response");
            let recovered = extract_sections(candidate, schema);
            if recovered.is_empty() {
                return Err(ClassifiedError::new(
                    ErrorKind::ParseFailure,
                    Stage::Decoded,
                    format!("no {} fields could be recovered: {}", schema.name, failure.reason),
                )
                .with_excerpt(raw));
            }
            debug!(schema = schema.name, keys = recovered.len(), "Recovered fields from malformed response");
            Value::Object(recovered)
        }
    };

    let normalized = normalize(&decoded, schema);
    debug!(schema = schema.name, "Response normalized");
    validate(normalized, raw)
}
