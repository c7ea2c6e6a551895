//! Fallback section extraction for responses that failed strict decoding.
//!
//! For every field of the target schema the raw text is searched for
//! `"key": <value>` (canonical key or any alias) among the keys of the
//! outermost object; keys nested inside entries never count. A closed array or
//! object value ends at its bracket, anything else runs to the next key or the
//! end of the text. The span is read according to the field kind:
//!
//! - text: the first complete string literal
//! - number: the leading numeric literal
//! - string list: every complete string element of the array; a trailing
//!   unterminated fragment is ignored
//! - object: parsed whole when balanced, otherwise recovered key by key
//! - records: every balanced `{...}` element; when the array holds plain strings
//!   instead of objects, the line heuristics below are applied to them
//!
//! A field whose key never appears may still be found under a plain-text
//! heading ("Work Experience", "Education") when the model ignored the JSON
//! instruction. Records under a heading are rebuilt line by line: bullet lines
//! become items, and the first non-bullet line of an entry is split into
//! primary / secondary / dates on " at ", separators, parenthesized years and
//! 4-digit year tokens. These heuristics are best effort.
//!
//! Keys that cannot be recovered are left out; the normalizer fills defaults.
//! Nothing here fails: an empty map is a valid answer.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::schema::{EntryLayout, Field, FieldKind, Schema};

static PAREN_DATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^()]*\b(?:19|20)\d{2}\b[^()]*)\)").expect("paren date pattern is valid")
});

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+";

static YEAR_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{MONTH})?(?:19|20)\d{{2}}\s*(?:-|–|—|to)\s*(?:(?:{MONTH})?(?:19|20)\d{{2}}|present|current|now)\b"
    ))
    .expect("year range pattern is valid")
});

static SINGLE_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{MONTH})?(?:19|20)\d{{2}}\b")).expect("year pattern is valid")
});

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").expect("number pattern is valid"));

static NUMBERED_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}[.)]\s+").expect("numbered bullet pattern is valid"));

const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '–', '—', '▪', '◦', '‣', '●'];

/// Recovers whatever top-level fields of `schema` can be found in `text`.
pub fn extract_sections(text: &str, schema: &Schema) -> Map<String, Value> {
    let keys = top_level_keys(text);
    let mut recovered = Map::new();

    for field in schema.fields {
        let value = match locate_json_value(text, field, &keys) {
            Some(span) => from_json_span(span, field),
            None => locate_heading_section(text, field, schema)
                .and_then(|lines| from_section(&lines, field)),
        };
        if let Some(value) = value {
            recovered.insert(field.key.to_string(), value);
        }
    }

    recovered
}

// ────────────────────────────────────────────────────────────────────────────
// Locating spans
// ────────────────────────────────────────────────────────────────────────────

/// A `"name":` occurrence in the scanned text.
#[derive(Debug)]
struct KeySite<'a> {
    name: &'a str,
    depth: usize,
    key_start: usize,
    value_start: usize,
}

/// Keys of the outermost object in `text`, in order of appearance. Keys of
/// nested objects are dropped. Scanning stops at an unterminated string.
fn top_level_keys(text: &str) -> Vec<KeySite<'_>> {
    let bytes = text.as_bytes();
    let skip_whitespace = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };

    let mut sites = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let Some(end) = string_end(bytes, i) else {
                    break;
                };
                let colon = skip_whitespace(end);
                if bytes.get(colon) == Some(&b':') {
                    sites.push(KeySite {
                        name: &text[i + 1..end - 1],
                        depth,
                        key_start: i,
                        value_start: skip_whitespace(colon + 1),
                    });
                }
                i = end;
                continue;
            }
            b'[' | b'{' => depth += 1,
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
    }

    let Some(outermost) = sites.iter().map(|site| site.depth).min() else {
        return sites;
    };
    sites.retain(|site| site.depth == outermost);
    sites
}

/// Text after `"key":` for the first name of `field` that occurs among `keys`.
/// A terminated container ends at its closing bracket; anything else runs to
/// the next key.
fn locate_json_value<'a>(text: &'a str, field: &Field, keys: &[KeySite<'a>]) -> Option<&'a str> {
    let index = field
        .names()
        .find_map(|name| keys.iter().position(|site| site.name == name))?;
    let end = keys
        .get(index + 1)
        .map(|next| next.key_start)
        .unwrap_or(text.len());
    let span = text.get(keys[index].value_start..end)?;

    match span.as_bytes().first() {
        Some(b'[' | b'{') => Some(
            container_end(span.as_bytes(), 0)
                .map(|close| &span[..close])
                .unwrap_or(span),
        ),
        _ => Some(span),
    }
}

/// Lines under a heading of `field`, up to the next heading of any field.
fn locate_heading_section<'a>(text: &'a str, field: &Field, schema: &Schema) -> Option<Vec<&'a str>> {
    if field.headings.is_empty() {
        return None;
    }

    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|line| matches_heading(line, field.headings))?;
    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| {
            !schema
                .fields
                .iter()
                .any(|f| matches_heading(line, f.headings))
        })
        .copied()
        .collect();

    Some(body)
}

fn matches_heading(line: &str, headings: &[&str]) -> bool {
    let key = line
        .trim()
        .trim_start_matches('#')
        .trim_matches(|c: char| c == '*' || c == '_' || c == ':' || c.is_whitespace())
        .to_lowercase();
    !key.is_empty() && headings.iter().any(|h| *h == key)
}

// ────────────────────────────────────────────────────────────────────────────
// Reading JSON-shaped spans
// ────────────────────────────────────────────────────────────────────────────

fn from_json_span(span: &str, field: &Field) -> Option<Value> {
    let span = span.trim_start();
    match field.kind {
        FieldKind::Text => leading_string(span).map(Value::String),
        FieldKind::Number => leading_number(span),
        FieldKind::TextList => {
            if span.starts_with('[') {
                Some(Value::Array(
                    array_strings(span).into_iter().map(Value::String).collect(),
                ))
            } else {
                leading_string(span).map(|s| Value::Array(vec![Value::String(s)]))
            }
        }
        FieldKind::Object(schema) => {
            if !span.starts_with('{') {
                return None;
            }
            let object = match container_end(span.as_bytes(), 0) {
                Some(end) => parse_or_recover(&span[..end], schema),
                None => extract_sections(span, schema),
            };
            (!object.is_empty()).then_some(Value::Object(object))
        }
        FieldKind::Records { entry, layout } => {
            if !span.starts_with('[') {
                return leading_string(span).and_then(|s| {
                    let lines: Vec<&str> = s.lines().collect();
                    layout.and_then(|layout| entries_from_lines(&lines, layout))
                });
            }
            let objects = array_objects(span);
            if !objects.is_empty() {
                let entries: Vec<Value> = objects
                    .into_iter()
                    .map(|slice| parse_or_recover(slice, entry))
                    .filter(|object| !object.is_empty())
                    .map(Value::Object)
                    .collect();
                return Some(Value::Array(entries));
            }
            let strings = array_strings(span);
            if strings.is_empty() {
                return array_is_closed_empty(span).then(|| Value::Array(Vec::new()));
            }
            let lines: Vec<&str> = strings.iter().flat_map(|s| s.lines()).collect();
            layout.and_then(|layout| entries_from_lines(&lines, layout))
        }
    }
}

/// Parses a balanced object slice, or recovers its keys one by one when it is
/// itself malformed.
fn parse_or_recover(slice: &str, schema: &Schema) -> Map<String, Value> {
    match serde_json::from_str::<Value>(slice) {
        Ok(Value::Object(object)) => object,
        _ => extract_sections(slice, schema),
    }
}

fn leading_string(span: &str) -> Option<String> {
    if !span.starts_with('"') {
        return None;
    }
    let end = string_end(span.as_bytes(), 0)?;
    Some(decode_literal(&span[..end]))
}

fn leading_number(span: &str) -> Option<Value> {
    if let Some(captures) = LEADING_NUMBER.captures(span) {
        let number = captures[1].parse::<f64>().ok()?;
        return json_number(number);
    }
    leading_string(span)
        .and_then(|s| s.trim().trim_end_matches('%').trim().parse::<f64>().ok())
        .and_then(json_number)
}

fn json_number(number: f64) -> Option<Value> {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        Some(Value::from(number as i64))
    } else {
        serde_json::Number::from_f64(number).map(Value::Number)
    }
}

/// Decodes a complete string literal (quotes included). A literal serde rejects
/// (raw control characters, bad escapes) is kept as its verbatim inner text
/// rather than being re-escaped.
fn decode_literal(literal: &str) -> String {
    serde_json::from_str::<String>(literal)
        .unwrap_or_else(|_| literal[1..literal.len() - 1].to_string())
}

/// Byte index just past the string literal whose opening quote is at `start`.
/// `None` when the literal is unterminated.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Byte index just past the container opening at `start`, or `None` when the
/// text ends first.
fn container_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                i = string_end(bytes, i)?;
                continue;
            }
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Complete string elements directly inside the array opening at byte 0.
fn array_strings(span: &str) -> Vec<String> {
    let bytes = span.as_bytes();
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => match string_end(bytes, i) {
                Some(end) => {
                    if depth == 1 {
                        items.push(decode_literal(&span[i..end]));
                    }
                    i = end;
                    continue;
                }
                None => break,
            },
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        i += 1;
    }

    items
}

/// Balanced object elements directly inside the array opening at byte 0.
/// A trailing unterminated object is ignored.
fn array_objects(span: &str) -> Vec<&str> {
    let bytes = span.as_bytes();
    let mut objects = Vec::new();
    let mut i = 1;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => match container_end(bytes, i) {
                Some(end) => {
                    objects.push(&span[i..end]);
                    i = end;
                    continue;
                }
                None => break,
            },
            b'"' => match string_end(bytes, i) {
                Some(end) => {
                    i = end;
                    continue;
                }
                None => break,
            },
            b'[' => match container_end(bytes, i) {
                Some(end) => {
                    i = end;
                    continue;
                }
                None => break,
            },
            b']' => break,
            _ => {}
        }
        i += 1;
    }

    objects
}

fn array_is_closed_empty(span: &str) -> bool {
    span.strip_prefix('[')
        .map(|rest| rest.trim_start().starts_with(']'))
        .unwrap_or(false)
}

// ────────────────────────────────────────────────────────────────────────────
// Reading plain-text sections
// ────────────────────────────────────────────────────────────────────────────

fn from_section(lines: &[&str], field: &Field) -> Option<Value> {
    let content: Vec<&str> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    if content.is_empty() {
        return None;
    }

    match field.kind {
        FieldKind::Text => Some(Value::String(content.join("\n"))),
        FieldKind::TextList => {
            let items: Vec<Value> = if content.len() == 1 && bullet_text(content[0]).is_none() {
                content[0]
                    .split([',', ';'])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| Value::String(s.to_string()))
                    .collect()
            } else {
                content
                    .iter()
                    .map(|line| bullet_text(line).unwrap_or(*line))
                    .map(|s| Value::String(s.to_string()))
                    .collect()
            };
            (!items.is_empty()).then_some(Value::Array(items))
        }
        FieldKind::Records {
            layout: Some(layout),
            ..
        } => entries_from_lines(&content, layout),
        FieldKind::Number | FieldKind::Object(_) | FieldKind::Records { layout: None, .. } => None,
    }
}

/// Text of a bullet line without its marker, or `None` for a non-bullet line.
fn bullet_text(line: &str) -> Option<&str> {
    let line = line.trim();
    if let Some(m) = NUMBERED_BULLET.find(line) {
        return Some(line[m.end()..].trim());
    }
    let mut chars = line.chars();
    let first = chars.next()?;
    if BULLET_MARKERS.contains(&first) {
        let rest = chars.as_str();
        // "-" must be followed by whitespace so "-2019" style tokens stay intact
        if rest.starts_with(char::is_whitespace) || first != '-' && first != '*' {
            return Some(rest.trim());
        }
    }
    None
}

#[derive(Default)]
struct EntryDraft {
    primary: String,
    secondary: String,
    dates: String,
    items: Vec<String>,
}

impl EntryDraft {
    fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty() && self.items.is_empty()
    }

    fn into_value(self, layout: EntryLayout) -> Value {
        let mut object = Map::new();
        object.insert(layout.primary.to_string(), Value::String(self.primary));
        object.insert(layout.secondary.to_string(), Value::String(self.secondary));
        object.insert(layout.dates.to_string(), Value::String(self.dates));
        object.insert(
            layout.items.to_string(),
            Value::Array(self.items.into_iter().map(Value::String).collect()),
        );
        Value::Object(object)
    }
}

fn entries_from_lines(lines: &[&str], layout: EntryLayout) -> Option<Value> {
    let mut entries = Vec::new();
    let mut current: Option<EntryDraft> = None;

    for raw in lines {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        if let Some(item) = bullet_text(line) {
            if !item.is_empty() {
                current.get_or_insert_with(EntryDraft::default).items.push(item.to_string());
            }
            continue;
        }

        let (primary, secondary, dates) = split_header(line);
        match current.as_mut() {
            // A second header line before any bullets fills what the first left empty.
            Some(draft) if draft.items.is_empty() && !draft.primary.is_empty() => {
                if draft.secondary.is_empty() {
                    draft.secondary = if secondary.is_empty() { primary } else { secondary };
                }
                if draft.dates.is_empty() {
                    draft.dates = dates;
                }
                continue;
            }
            _ => {}
        }

        if let Some(done) = current.take().filter(|d| !d.is_empty()) {
            entries.push(done.into_value(layout));
        }
        current = Some(EntryDraft {
            primary,
            secondary,
            dates,
            items: Vec::new(),
        });
    }

    if let Some(done) = current.filter(|d| !d.is_empty()) {
        entries.push(done.into_value(layout));
    }

    (!entries.is_empty()).then_some(Value::Array(entries))
}

/// Strips JSON punctuation left around a line taken from a malformed payload.
fn clean_line(line: &str) -> &str {
    line.trim()
        .trim_end_matches(',')
        .trim_matches(|c: char| c == '"' || c.is_whitespace())
}

/// Splits an entry header into (primary, secondary, dates).
///
/// `Senior Engineer at Acme Corp (2019 - 2022)` → (`Acme Corp`, `Senior Engineer`, `2019 - 2022`)
/// `Acme Corp | Senior Engineer | 2019 - 2022` → (`Acme Corp`, `Senior Engineer`, `2019 - 2022`)
fn split_header(line: &str) -> (String, String, String) {
    let (rest, dates) = take_dates(line);
    let rest = trim_separators(&rest);

    if let Some(pos) = rest.find(" at ").or_else(|| rest.find(" At ")) {
        let secondary = trim_separators(&rest[..pos]);
        let primary = trim_separators(&rest[pos + 4..]);
        return (primary.to_string(), secondary.to_string(), dates);
    }

    for separator in [" | ", " – ", " — ", " - ", ", "] {
        if let Some((first, second)) = rest.split_once(separator) {
            return (
                trim_separators(first).to_string(),
                trim_separators(second).to_string(),
                dates,
            );
        }
    }

    (rest.to_string(), String::new(), dates)
}

/// Removes the date expression from a header line and returns it separately.
fn take_dates(line: &str) -> (String, String) {
    if let Some(captures) = PAREN_DATES.captures(line) {
        if let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) {
            let rest = format!("{}{}", &line[..whole.start()], &line[whole.end()..]);
            return (rest, inner.as_str().trim().to_string());
        }
    }
    for pattern in [&*YEAR_RANGE, &*SINGLE_YEAR] {
        if let Some(m) = pattern.find(line) {
            let rest = format!("{}{}", &line[..m.start()], &line[m.end()..]);
            return (rest, m.as_str().trim().to_string());
        }
    }
    (line.to_string(), String::new())
}

fn trim_separators(text: &str) -> &str {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, ',' | '|' | '-' | '–' | '—' | ':' | ';')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static EXPERIENCE: Schema = Schema {
        name: "work_experience",
        fields: &[
            Field::text("company"),
            Field::text("title"),
            Field::text("dates"),
            Field::text_list("accomplishments"),
        ],
    };

    const LAYOUT: EntryLayout = EntryLayout {
        primary: "company",
        secondary: "title",
        dates: "dates",
        items: "accomplishments",
    };

    static OVERALL: Schema = Schema {
        name: "overall",
        fields: &[Field::number("score"), Field::text("summary")],
    };

    static RESUME: Schema = Schema {
        name: "resume",
        fields: &[
            Field::text("summary").headings(&["summary", "professional summary"]),
            Field::records("work_experience", &EXPERIENCE, Some(LAYOUT))
                .aliases(&["experience"])
                .headings(&["work experience", "experience"]),
            Field::text_list("technical_skills")
                .aliases(&["skills"])
                .headings(&["technical skills", "skills"]),
        ],
    };

    static QUESTIONS: Schema = Schema {
        name: "interview_questions",
        fields: &[
            Field::text_list("technical_questions"),
            Field::text_list("behavioral_questions"),
            Field::text_list("situational_questions"),
            Field::text_list("role_specific_questions"),
            Field::text_list("culture_fit_questions"),
        ],
    };

    static MATCH: Schema = Schema {
        name: "match",
        fields: &[
            Field::number("match_score"),
            Field::text_list("matched_skills"),
            Field::text_list("missing_skills"),
        ],
    };

    static FEEDBACK: Schema = Schema {
        name: "feedback",
        fields: &[
            Field::records("answer_feedback", &OVERALL, None),
            Field::object("overall", &OVERALL),
        ],
    };

    #[test]
    fn test_recovers_technical_questions_from_invalid_json() {
        let text = r#"{"technical_questions": ["a","b"], "behavioral_questions": ["c", "d"#;
        let out = extract_sections(text, &QUESTIONS);
        assert_eq!(out["technical_questions"], json!(["a", "b"]));
        assert_eq!(out["behavioral_questions"], json!(["c"]));
        assert!(!out.contains_key("situational_questions"));
    }

    #[test]
    fn test_truncated_match_response() {
        let text = r#"{"match_score": 85, "matched_skills": ["Python"], "missing_sk"#;
        let out = extract_sections(text, &MATCH);
        assert_eq!(out["match_score"], json!(85));
        assert_eq!(out["matched_skills"], json!(["Python"]));
        assert!(!out.contains_key("missing_skills"));
    }

    #[test]
    fn test_trailing_comma_does_not_lose_items() {
        let text = r#"{"technical_questions": ["Explain ownership", "What is Send?",], }"#;
        let out = extract_sections(text, &QUESTIONS);
        assert_eq!(
            out["technical_questions"],
            json!(["Explain ownership", "What is Send?"])
        );
    }

    #[test]
    fn test_escaped_quotes_and_brackets_inside_strings() {
        let text = r#"{"technical_questions": ["What does \"[T]\" mean?", "Why ]?"], oops"#;
        let out = extract_sections(text, &QUESTIONS);
        assert_eq!(
            out["technical_questions"],
            json!(["What does \"[T]\" mean?", "Why ]?"])
        );
    }

    #[test]
    fn test_nothing_recoverable_is_empty() {
        assert!(extract_sections("I'm sorry, I can't help with that.", &QUESTIONS).is_empty());
        assert!(extract_sections("", &MATCH).is_empty());
    }

    #[test]
    fn test_numeric_string_score() {
        let text = r#"{"match_score": "72%", "matched_skills": [}"#;
        let out = extract_sections(text, &MATCH);
        assert_eq!(out["match_score"], json!(72));
    }

    #[test]
    fn test_balanced_objects_recovered_and_truncated_one_dropped() {
        let text = r#"{"answer_feedback": [{"score": 7, "summary": "good"}, {"score": 5, "summary": "ok"}, {"score": 3, "summ"#;
        let out = extract_sections(text, &FEEDBACK);
        assert_eq!(
            out["answer_feedback"],
            json!([{"score": 7, "summary": "good"}, {"score": 5, "summary": "ok"}])
        );
        assert!(!out.contains_key("overall"));
    }

    #[test]
    fn test_truncated_nested_object_recovers_keys() {
        let text = r#"{"answer_feedback": [], "overall": {"score": 6.5, "summary": "Solid but"#;
        let out = extract_sections(text, &FEEDBACK);
        assert_eq!(out["answer_feedback"], json!([]));
        assert_eq!(out["overall"], json!({"score": 6.5}));
    }

    #[test]
    fn test_malformed_object_element_is_recovered_field_by_field() {
        let text = r#"{"work_experience": [{"company": "Acme", "title": "Engineer" "dates": "2020", "accomplishments": ["Shipped"]}], "summary": "x" oops"#;
        let out = extract_sections(text, &RESUME);
        assert_eq!(
            out["work_experience"],
            json!([{"company": "Acme", "title": "Engineer", "dates": "2020", "accomplishments": ["Shipped"]}])
        );
        assert_eq!(out["summary"], json!("x"));
    }

    #[test]
    fn test_alias_key_is_located() {
        let text = r#"{"skills": ["Rust", "Go"], "summary": "Engineer""#;
        let out = extract_sections(text, &RESUME);
        assert_eq!(out["technical_skills"], json!(["Rust", "Go"]));
    }

    #[test]
    fn test_string_entries_use_line_heuristics() {
        let text = r#"{"work_experience": ["Senior Engineer at Acme Corp (2019 - 2022)", "- Cut latency by 40%", "- Led 4 engineers"], "summary": "#;
        let out = extract_sections(text, &RESUME);
        assert_eq!(
            out["work_experience"],
            json!([{
                "company": "Acme Corp",
                "title": "Senior Engineer",
                "dates": "2019 - 2022",
                "accomplishments": ["Cut latency by 40%", "Led 4 engineers"]
            }])
        );
    }

    #[test]
    fn test_plain_text_resume_sections() {
        let text = "\
Professional Summary
Backend engineer with 8 years of experience.

Work Experience
Staff Engineer at Globex (Jan 2021 - Present)
• Designed the billing platform
• Mentored 6 engineers
Initech | Software Engineer | 2016 - 2020
- Migrated 40 services to Kubernetes

Skills
Rust, Go, PostgreSQL";
        let out = extract_sections(text, &RESUME);
        assert_eq!(out["summary"], json!("Backend engineer with 8 years of experience."));
        assert_eq!(out["technical_skills"], json!(["Rust", "Go", "PostgreSQL"]));
        assert_eq!(
            out["work_experience"],
            json!([
                {
                    "company": "Globex",
                    "title": "Staff Engineer",
                    "dates": "Jan 2021 - Present",
                    "accomplishments": ["Designed the billing platform", "Mentored 6 engineers"]
                },
                {
                    "company": "Initech",
                    "title": "Software Engineer",
                    "dates": "2016 - 2020",
                    "accomplishments": ["Migrated 40 services to Kubernetes"]
                }
            ])
        );
    }

    #[test]
    fn test_two_line_header() {
        let lines = ["Acme Corp", "Backend Developer 2018", "- Built APIs"];
        let out = entries_from_lines(&lines, LAYOUT).unwrap();
        assert_eq!(
            out,
            json!([{"company": "Acme Corp", "title": "Backend Developer", "dates": "2018", "accomplishments": ["Built APIs"]}])
        );
    }

    #[test]
    fn test_bullets_without_header_form_one_entry() {
        let lines = ["* Shipped the app", "* Raised NPS by 12 points"];
        let out = entries_from_lines(&lines, LAYOUT).unwrap();
        assert_eq!(out[0]["company"], json!(""));
        assert_eq!(out[0]["accomplishments"], json!(["Shipped the app", "Raised NPS by 12 points"]));
    }

    #[test]
    fn test_split_header_variants() {
        assert_eq!(
            split_header("Data Analyst at Initech, 2015"),
            ("Initech".to_string(), "Data Analyst".to_string(), "2015".to_string())
        );
        assert_eq!(
            split_header("Globex - Product Manager"),
            ("Globex".to_string(), "Product Manager".to_string(), String::new())
        );
        assert_eq!(
            split_header("Freelance"),
            ("Freelance".to_string(), String::new(), String::new())
        );
    }

    #[test]
    fn test_bullet_detection() {
        assert_eq!(bullet_text("- item"), Some("item"));
        assert_eq!(bullet_text("• item"), Some("item"));
        assert_eq!(bullet_text("3. item"), Some("item"));
        assert_eq!(bullet_text("-2019 wasn't a bullet"), None);
        assert_eq!(bullet_text("Acme Corp"), None);
    }

    #[test]
    fn test_nested_alias_key_does_not_cut_records() {
        let text = r#"{"summary": "Backend engineer", "work_experience": [{"company": "Acme", "title": "SRE", "dates": "2020", "accomplishments": ["Cut pages"], "skills": ["Go"]}, {"company": "Globex", "title": "Dev", "dates": "2018"}], "technical_skills": ["Rust", "Kafk"#;
        let out = extract_sections(text, &RESUME);
        let entries = out["work_experience"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["company"], json!("Acme"));
        assert_eq!(entries[1]["company"], json!("Globex"));
        assert_eq!(out["technical_skills"], json!(["Rust"]));
    }

    #[test]
    fn test_nested_key_is_not_taken_for_missing_top_level_field() {
        let text = r#"{"work_experience": [{"company": "Acme", "skills": ["Go"]}], "summary": "Eng"#;
        let out = extract_sections(text, &RESUME);
        assert!(!out.contains_key("technical_skills"));
        assert_eq!(out["work_experience"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_closed_container_ends_at_its_bracket() {
        let text = r#"{"technical_questions": ["a", "b"] "behavioral_questions": ["c""#;
        let out = extract_sections(text, &QUESTIONS);
        assert_eq!(out["technical_questions"], json!(["a", "b"]));
        assert_eq!(out["behavioral_questions"], json!(["c"]));
    }

    #[test]
    fn test_sibling_key_bounds_the_span() {
        let text = r#"{"summary": , "technical_skills": ["Rust"]"#;
        let out = extract_sections(text, &RESUME);
        assert!(!out.contains_key("summary"));
        assert_eq!(out["technical_skills"], json!(["Rust"]));
    }
}
