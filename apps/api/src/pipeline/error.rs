use std::fmt;

/// Upper bound on the raw-response excerpt carried for diagnostics.
pub const MAX_EXCERPT_CHARS: usize = 500;

/// Failure taxonomy for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The service answered with no text at all.
    EmptyResponse,
    /// Neither strict decoding nor section extraction recovered a single key.
    ParseFailure,
    /// The record is structurally fine but carries nothing usable for the task.
    EmptyResult,
    /// The normalized value is not an object, or out of its declared range.
    SchemaInvalid,
    /// No service configured, or the call itself failed.
    UpstreamUnavailable,
    /// A required task input was missing before anything was sent.
    MissingInput,
}

impl ErrorKind {
    /// Stable machine-readable code for API responses.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::EmptyResponse => "EMPTY_RESPONSE",
            ErrorKind::ParseFailure => "PARSE_FAILURE",
            ErrorKind::EmptyResult => "EMPTY_RESULT",
            ErrorKind::SchemaInvalid => "SCHEMA_INVALID",
            ErrorKind::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            ErrorKind::MissingInput => "MISSING_INPUT",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Pipeline states. Transitions only move forward; an error records the stage
/// that was being attempted when it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Built,
    Sent,
    Sanitized,
    Decoded,
    Normalized,
    Validated,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Built => "built",
            Stage::Sent => "sent",
            Stage::Sanitized => "sanitized",
            Stage::Decoded => "decoded",
            Stage::Normalized => "normalized",
            Stage::Validated => "validated",
        };
        f.write_str(name)
    }
}

/// The one error a task function can return.
///
/// `Display` renders `"{kind}: {message}"` followed by the raw excerpt when one
/// was captured, so a caller logging the error sees what the model actually said.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    pub excerpt: Option<String>,
    pub stage: Stage,
}

impl ClassifiedError {
    pub fn new(kind: ErrorKind, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            excerpt: None,
            stage,
        }
    }

    pub fn missing_input(field: &str) -> Self {
        Self::new(
            ErrorKind::MissingInput,
            Stage::Built,
            format!("{field} is required"),
        )
    }

    pub fn unavailable(stage: Stage, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UpstreamUnavailable, stage, message)
    }

    /// Attaches the first `MAX_EXCERPT_CHARS` characters of the raw response.
    pub fn with_excerpt(mut self, raw: &str) -> Self {
        self.excerpt = Some(excerpt(raw));
        self
    }
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if let Some(excerpt) = &self.excerpt {
            write!(f, " (response excerpt: {excerpt:?})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ClassifiedError {}

/// Char-boundary-safe prefix of `raw`, at most `MAX_EXCERPT_CHARS` characters.
pub fn excerpt(raw: &str) -> String {
    raw.chars().take(MAX_EXCERPT_CHARS).collect()
}
