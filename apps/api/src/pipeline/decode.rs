//! Strict JSON decoding. A pure parse attempt: no repair, no panics.

use serde_json::Value;

use super::error::excerpt;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure {
    pub reason: String,
    pub excerpt: String,
}

/// Result of one strict decode attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(Value),
    Failed(ParseFailure),
}

/// Parses `text` as a single JSON value. With `require_object`, any other
/// top-level type is reported as a failure.
pub fn decode(text: &str, require_object: bool) -> ParseOutcome {
    if text.trim().is_empty() {
        return failed("empty input", text);
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) if require_object && !value.is_object() => failed(
            &format!("expected a JSON object, found {}", type_name(&value)),
            text,
        ),
        Ok(value) => ParseOutcome::Parsed(value),
        Err(e) => failed(&format!("invalid JSON: {e}"), text),
    }
}

fn failed(reason: &str, text: &str) -> ParseOutcome {
    ParseOutcome::Failed(ParseFailure {
        reason: reason.to_string(),
        excerpt: excerpt(text),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
