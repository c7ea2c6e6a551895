//! Final gate: typed conversion plus a per-task usefulness check.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ClassifiedError, ErrorKind, Stage};
use super::schema::Schema;

/// A record type a task returns. Implementors name their schema and decide what
/// "usable" means for them.
pub trait StructuredOutput: DeserializeOwned + Send + 'static {
    fn schema() -> &'static Schema;

    /// Rejects records that are well-formed but useless to the caller.
    fn check_usable(&self) -> Result<(), Rejection>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub kind: ErrorKind,
    pub message: String,
}

impl Rejection {
    /// Nothing usable in the record.
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::EmptyResult,
            message: message.into(),
        }
    }

    /// A value outside its declared range.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::SchemaInvalid,
            message: message.into(),
        }
    }
}

/// Converts a normalized value into `T` and applies `T::check_usable`.
/// `raw` is the original response text, attached to any error as an excerpt.
pub fn validate<T: StructuredOutput>(normalized: Value, raw: &str) -> Result<T, ClassifiedError> {
    if !normalized.is_object() {
        return Err(ClassifiedError::new(
            ErrorKind::SchemaInvalid,
            Stage::Normalized,
            format!("{} record is not an object", T::schema().name),
        )
        .with_excerpt(raw));
    }

    let record: T = serde_json::from_value(normalized).map_err(|e| {
        ClassifiedError::new(
            ErrorKind::SchemaInvalid,
            Stage::Normalized,
            format!("{} record does not match its type: {e}", T::schema().name),
        )
        .with_excerpt(raw)
    })?;

    record.check_usable().map_err(|rejection| {
        ClassifiedError::new(rejection.kind, Stage::Validated, rejection.message).with_excerpt(raw)
    })?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::schema::Field;
    use serde::Deserialize;
    use serde_json::json;

    static SCORE: Schema = Schema {
        name: "score",
        fields: &[Field::number("score"), Field::text_list("notes")],
    };

    #[derive(Debug, Deserialize)]
    struct Score {
        score: f64,
        notes: Vec<String>,
    }

    impl StructuredOutput for Score {
        fn schema() -> &'static Schema {
            &SCORE
        }

        fn check_usable(&self) -> Result<(), Rejection> {
            if !(0.0..=10.0).contains(&self.score) {
                return Err(Rejection::invalid(format!("score {} outside 0-10", self.score)));
            }
            if self.score == 0.0 && self.notes.is_empty() {
                return Err(Rejection::empty("no score and no notes"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_usable_record_passes() {
        let record: Score = validate(json!({"score": 7, "notes": ["ok"]}), "raw").unwrap();
        assert_eq!(record.score, 7.0);
        assert_eq!(record.notes, vec!["ok"]);
    }

    #[test]
    fn test_non_object_is_schema_invalid() {
        let err = validate::<Score>(json!([1, 2]), "[1, 2]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemaInvalid);
        assert_eq!(err.stage, Stage::Normalized);
        assert_eq!(err.excerpt.as_deref(), Some("[1, 2]"));
    }

    #[test]
    fn test_type_mismatch_is_schema_invalid() {
        let err = validate::<Score>(json!({"score": "high", "notes": []}), "x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemaInvalid);
    }

    #[test]
    fn test_rejection_kind_is_preserved() {
        let err = validate::<Score>(json!({"score": 0, "notes": []}), "{}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyResult);
        assert_eq!(err.stage, Stage::Validated);

        let err = validate::<Score>(json!({"score": 42, "notes": []}), "{}").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SchemaInvalid);
        assert!(err.message.contains("42"));
    }
}
