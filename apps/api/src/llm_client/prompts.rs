// Shared prompt constants and prompt-building utilities.
// Each feature module that needs completions defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

use serde::Serialize;

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt fragment for prose answers that carry one JSON block.
pub const EMBEDDED_JSON_INSTRUCTION: &str = "Start with a short plain-text rationale \
    (at most five sentences), then output exactly one JSON object. \
    Do NOT output more than one JSON object.";

/// System prompt fragment for plain-text documents.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Respond with the document text only. \
    Do NOT use markdown, headings, or code fences. \
    Do NOT add commentary before or after the document.";

/// Common honesty rule appended to every resume-facing prompt.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Use only facts present in the candidate material provided. \
    Do NOT invent employers, titles, dates, degrees, metrics, or skills. \
    If the material does not support a claim, omit it.";

/// Serializes structured prompt input as pretty JSON for embedding in a template.
pub fn embed_json<T: Serialize>(value: &T) -> String {
    // Derived `Serialize` on string-keyed records never fails.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

/// Fills `{name}` placeholders in a single pass. Substituted values are never
/// re-scanned, so user text containing `{...}` is embedded verbatim.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
