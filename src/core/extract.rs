//! Pulls a JSON object out of free-form model output.
//!
//! The rules are plain text processing: trim, drop one leading and one
//! trailing code fence, then take everything from the first `{` to the last
//! `}` and decode it. The span is not brace-balanced, so a reply holding two
//! separate objects (or stray braces in prose) yields a span that fails to
//! decode. That failure is reported, never papered over.

use crate::utils::error::{PlannerError, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^```(?:json)?\s*|\s*```$").expect("fence pattern"));

static OBJECT_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("object span pattern"));

/// Removes an optional leading ```` ```json ```` marker and an optional
/// trailing ```` ``` ```` marker, keeping the enclosed content.
pub fn strip_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Earliest `{` through latest `}`, inclusive.
pub fn object_span(text: &str) -> Option<&str> {
    OBJECT_SPAN_RE.find(text).map(|m| m.as_str())
}

pub fn extract_json(raw: &str) -> Result<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(PlannerError::EmptyResponse);
    }

    let text = strip_fences(text);

    let span = object_span(&text).ok_or_else(|| PlannerError::NoJsonFound {
        text: text.clone(),
    })?;

    serde_json::from_str(span).map_err(|source| PlannerError::InvalidJson {
        text: span.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_empty_and_blank_replies() {
        assert_eq!(extract_json("").unwrap_err().kind(), ErrorKind::EmptyResponse);
        assert_eq!(extract_json("   ").unwrap_err().kind(), ErrorKind::EmptyResponse);
        assert_eq!(extract_json("\n\t ").unwrap_err().kind(), ErrorKind::EmptyResponse);
    }

    #[test]
    fn test_no_braces() {
        let err = extract_json("no braces here").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoJsonFound);
        assert!(err.to_string().contains("no braces here"));
    }

    #[test]
    fn test_fence_only_reply_has_no_json() {
        let err = extract_json("```json\n```").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoJsonFound);
    }

    #[test]
    fn test_malformed_object_text_is_reported() {
        // a lone `{` without a closing brace has no span at all
        let err = extract_json("{not valid json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoJsonFound);
        assert!(err.to_string().contains("{not valid json"));

        let err = extract_json("{not valid json}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert!(err.to_string().contains("{not valid json"));
    }

    #[test]
    fn test_prose_around_object() {
        let value = extract_json(r#"prefix {"a":1} suffix"#).unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_fenced_object() {
        let value = extract_json("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_fence_marker_is_case_insensitive() {
        let value = extract_json("```JSON {\"a\":1}```").unwrap();
        assert_eq!(value, json!({"a": 1}));

        let value = extract_json("```\n{\"a\":1}\n```").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_nested_objects_survive_greedy_span() {
        let payload = json!({
            "completion": 42.5,
            "riskyTasks": [{"id": 1, "name": "x", "risk": "high", "reason": "{braces}"}],
            "developerEfficiency": []
        });
        let fenced = format!("```json\n{}\n```", serde_json::to_string_pretty(&payload).unwrap());
        assert_eq!(extract_json(&fenced).unwrap(), payload);
        assert_eq!(extract_json(&payload.to_string()).unwrap(), payload);
    }

    #[test]
    fn test_non_ascii_content_is_preserved() {
        let value = extract_json(r#"{"reason": "Опыт с бэкендом"}"#).unwrap();
        assert_eq!(value["reason"], "Опыт с бэкендом");
    }

    #[test]
    fn test_two_objects_form_one_invalid_span() {
        let err = extract_json(r#"{"a":1} text {"b":2}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        match err {
            PlannerError::InvalidJson { text, .. } => {
                assert_eq!(text, r#"{"a":1} text {"b":2}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strip_fences_only_touches_ends() {
        assert_eq!(strip_fences("```json\nbody ``` inner\n```"), "body ``` inner");
        assert_eq!(strip_fences("plain"), "plain");
    }

    #[test]
    fn test_object_span_is_first_to_last_brace() {
        assert_eq!(object_span("a {b} c {d} e"), Some("{b} c {d}"));
        assert_eq!(object_span("} {"), None);
    }
}
