//! Removes markdown wrapper artifacts from raw model output.
//!
//! Only fence markers and surrounding whitespace are removed. String content
//! and escape sequences are never rewritten: a valid JSON payload that comes
//! back wrapped in ```json fences decodes exactly as it would unwrapped.

use std::sync::LazyLock;

use regex::Regex;

/// A line holding nothing but a fence marker, with or without a language tag.
static FENCE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*```[A-Za-z0-9_+.-]*[ \t]*\r?(?:\n|$)").expect("fence pattern is valid")
});

/// Trims the text and strips every code-fence marker. Idempotent.
pub fn sanitize(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let without_lines = FENCE_LINE.replace_all(text.trim(), "");
    let mut out: &str = without_lines.trim();

    // Single-line wrapping: ```json{"a":1}```. A word directly after the fence
    // is only a language tag when a line break or the payload follows it.
    if let Some(rest) = out.strip_prefix("```") {
        let tag_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || "_+.-".contains(c)))
            .unwrap_or(rest.len());
        let after_tag = rest[tag_len..].trim_start_matches([' ', '\t']);
        let is_tag = tag_len > 0
            && (after_tag.is_empty() || after_tag.starts_with(['\n', '\r', '{', '[']));
        out = if is_tag { after_tag } else { rest };
    }
    if let Some(rest) = out.strip_suffix("```") {
        out = rest;
    }

    out.trim().to_string()
}

/// Narrows prose-with-a-JSON-block to the outermost `{...}` span.
///
/// Text that already starts with `{` or `[` is returned untouched, as is text with
/// no closing brace (a truncated block is left for the fallback extractor).
pub fn isolate_json_block(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return trimmed;
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_tagged_fence() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(sanitize(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strips_untagged_fence() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(sanitize(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_single_line_fence_keeps_first_word() {
        assert_eq!(sanitize("```Dear team, thanks```"), "Dear team, thanks");
        assert_eq!(sanitize("```Thanks```"), "Thanks");
        assert_eq!(sanitize("```json {\"a\": 1}```"), "{\"a\": 1}");
        assert_eq!(sanitize("```json[1, 2]```"), "[1, 2]");
    }

    #[test]
    fn test_no_fences_only_trims() {
        assert_eq!(sanitize("  {\"key\": \"value\"}\n\n"), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_single_line_fence() {
        assert_eq!(sanitize("```json{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_unterminated_fence_from_truncated_output() {
        let input = "```json\n{\"match_score\": 85, \"matched_skills\": [\"Py";
        assert_eq!(sanitize(input), "{\"match_score\": 85, \"matched_skills\": [\"Py");
    }

    #[test]
    fn test_inner_newlines_are_preserved_verbatim() {
        let input = "```json\n{\n  \"a\": 1,\n\n  \"b\": 2\n}\n```";
        assert_eq!(sanitize(input), "{\n  \"a\": 1,\n\n  \"b\": 2\n}");
    }

    #[test]
    fn test_escape_sequences_are_not_touched() {
        let payload = r#"{"summary": "Line one\nLine two\tTabbed \"quoted\" C:\\path"}"#;
        let wrapped = format!("```json\n{payload}\n```");
        assert_eq!(sanitize(&wrapped), payload);

        let direct: serde_json::Value = serde_json::from_str(payload).unwrap();
        let through: serde_json::Value = serde_json::from_str(&sanitize(&wrapped)).unwrap();
        assert_eq!(direct, through);
    }

    #[test]
    fn test_fences_around_plain_text() {
        let input = "```\nDear Hiring Manager,\n\nI am writing...\n```";
        assert_eq!(sanitize(input), "Dear Hiring Manager,\n\nI am writing...");
    }

    #[test]
    fn test_crlf_fences() {
        let input = "```json\r\n{\"a\": 1}\r\n```";
        assert_eq!(sanitize(input), "{\"a\": 1}");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "plain text",
            "```",
            "``````",
            "```json\n```json\n{}\n```\n```",
            "```json\n{\"a\": \"```not a fence```\"}\n```",
            "Here you go:\n```json\n{\"a\": 1}\n```\nAnything else?",
            "{\"a\": [1, 2, 3]}",
            "```python\nprint('hi')\n```",
            "```Dear team, thanks```",
            "\n\n```\n\n```\n\n",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_fence_text_inside_json_string_survives() {
        let payload = "{\"a\": \"```not a fence```\"}";
        assert_eq!(sanitize(payload), payload);
    }

    #[test]
    fn test_isolate_json_block_from_prose() {
        let text = "I tightened the summary.\n{\"summary\": \"x\"}\nLet me know!";
        assert_eq!(isolate_json_block(text), "{\"summary\": \"x\"}");
    }

    #[test]
    fn test_isolate_json_block_leaves_json_alone() {
        assert_eq!(isolate_json_block("{\"a\": {\"b\": 1}}"), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_isolate_json_block_leaves_truncated_block() {
        let text = "Rationale first.\n{\"summary\": \"cut";
        assert_eq!(isolate_json_block(text), text);
    }

    #[test]
    fn test_isolate_json_block_is_idempotent() {
        let text = "Notes.\n{\"a\": 1}\nBye";
        let once = isolate_json_block(text);
        assert_eq!(isolate_json_block(once), once);
    }
}
