//! Coerces any JSON value into the canonical shape of a schema.
//!
//! Total over its input: every branch has a default, so the output always has
//! every declared field with the declared container type. Strings are trimmed.
//! Running it on its own output returns the same value.

use serde_json::{Map, Number, Value};

use super::schema::{FieldKind, Schema};

/// Normalizes `value` against `schema`. Non-object input yields an all-default record.
pub fn normalize(value: &Value, schema: &Schema) -> Value {
    let empty = Map::new();
    let source = value.as_object().unwrap_or(&empty);
    Value::Object(normalize_object(source, schema))
}

fn normalize_object(source: &Map<String, Value>, schema: &Schema) -> Map<String, Value> {
    schema
        .fields
        .iter()
        .map(|field| (field.key.to_string(), coerce(field.resolve(source), field.kind)))
        .collect()
}

fn coerce(value: Option<&Value>, kind: FieldKind) -> Value {
    match kind {
        FieldKind::Text => match value {
            Some(Value::String(s)) => Value::String(s.trim().to_string()),
            _ => Value::String(String::new()),
        },
        FieldKind::Number => Value::Number(coerce_number(value)),
        FieldKind::TextList => match value {
            Some(Value::Array(items)) => Value::Array(items.iter().filter_map(text_item).collect()),
            _ => Value::Array(Vec::new()),
        },
        FieldKind::Object(schema) => match value {
            Some(Value::Object(object)) => Value::Object(normalize_object(object, schema)),
            _ => Value::Object(normalize_object(&Map::new(), schema)),
        },
        FieldKind::Records { entry, .. } => match value {
            Some(Value::Array(items)) => Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|object| Value::Object(normalize_object(object, entry)))
                    .collect(),
            ),
            _ => Value::Array(Vec::new()),
        },
    }
}

/// Numbers pass through; numeric strings such as `"85"` or `"85%"` are parsed.
fn coerce_number(value: Option<&Value>) -> Number {
    match value {
        Some(Value::Number(n)) => n.clone(),
        Some(Value::String(s)) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .unwrap_or_else(|| Number::from(0)),
        _ => Number::from(0),
    }
}

/// String-array element: strings are trimmed, blank strings and structured
/// values are dropped, scalars are stringified.
fn text_item(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(Value::String(s.trim().to_string())),
        Value::Number(n) => Some(Value::String(n.to_string())),
        Value::Bool(b) => Some(Value::String(b.to_string())),
        _ => None,
    }
}
