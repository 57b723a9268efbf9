//! Defensive field extraction from scanner match objects.
//!
//! Scanner versions disagree on where each field lives, so every field has a
//! prioritized list of alternative key paths; the first present, non-empty
//! value wins.

use serde_json::Value;

/// Key paths tried, in order, for the file path of a match.
const PATH_KEYS: &[&[&str]] = &[
    &["provenance", "0", "path"],
    &["location", "path"],
    &["location", "source_file"],
    &["file"],
];

/// Key paths tried, in order, for the 1-indexed line number.
const LINE_KEYS: &[&[&str]] = &[
    &["location", "source_span", "start", "line"],
    &["line"],
    &["line_number"],
];

/// Key paths tried, in order, for the matched secret text.
const SECRET_KEYS: &[&[&str]] = &[
    &["snippet", "matching"],
    &["matching"],
    &["match_value"],
    &["snippet"],
];

/// Key paths tried, in order, for the detector rule label.
const RULE_KEYS: &[&[&str]] = &[&["rule_name"], &["rule"], &["type"], &["name"]];

/// Raw per-match fields before post-processing; any of them may be absent.
#[derive(Debug, Default)]
pub(super) struct RawMatch {
    pub(super) file: Option<String>,
    pub(super) line: Option<usize>,
    pub(super) secret: Option<String>,
    pub(super) rule: Option<String>,
}

/// Extracts the raw fields of one match object. Never fails: a match the
/// extractor cannot read at all still yields an all-`None` record, so the
/// caller emits one finding per match.
pub(super) fn extract_match(value: &Value) -> RawMatch {
    RawMatch {
        file: first_string(value, PATH_KEYS),
        line: first_line(value, LINE_KEYS),
        secret: first_string(value, SECRET_KEYS),
        rule: first_string(value, RULE_KEYS),
    }
}

/// Walks `keys` into `value`; numeric segments index into arrays.
fn value_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in keys {
        current = match current {
            Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
            Value::Object(_) => current.get(*key)?,
            _ => return None,
        };
    }
    Some(current)
}

fn first_string(value: &Value, candidates: &[&[&str]]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|keys| value_at(value, keys))
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(std::borrow::ToOwned::to_owned)
}

fn first_line(value: &Value, candidates: &[&[&str]]) -> Option<usize> {
    candidates
        .iter()
        .filter_map(|keys| value_at(value, keys))
        .find_map(line_number)
}

/// Accepts both JSON numbers and numeric strings; rejects zero and negatives
/// (lines are 1-indexed, unknown means absent).
fn line_number(value: &Value) -> Option<usize> {
    let n = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    if n == 0 {
        return None;
    }
    usize::try_from(n).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_priority_prefers_provenance() {
        let m = json!({
            "provenance": [{"path": "/scan/a.py"}],
            "location": {"path": "/scan/b.py"},
            "file": "c.py"
        });
        assert_eq!(extract_match(&m).file.as_deref(), Some("/scan/a.py"));
    }

    #[test]
    fn test_path_falls_through_empty_values() {
        let m = json!({
            "provenance": [{"path": ""}],
            "location": {"source_file": "src/real.py"}
        });
        assert_eq!(extract_match(&m).file.as_deref(), Some("src/real.py"));
    }

    #[test]
    fn test_line_from_nested_span_and_from_string() {
        let m = json!({"location": {"source_span": {"start": {"line": 42}}}});
        assert_eq!(extract_match(&m).line, Some(42));

        let m = json!({"line": "7"});
        assert_eq!(extract_match(&m).line, Some(7));

        let m = json!({"line": 0});
        assert_eq!(extract_match(&m).line, None);
    }

    #[test]
    fn test_secret_ignores_object_shaped_snippet() {
        // "snippet" as a bare string is the last resort; as an object only
        // its "matching" member counts.
        let m = json!({"snippet": {"before": "x", "matching": "sk_live_1"}});
        assert_eq!(extract_match(&m).secret.as_deref(), Some("sk_live_1"));

        let m = json!({"snippet": "raw text match"});
        assert_eq!(extract_match(&m).secret.as_deref(), Some("raw text match"));
    }

    #[test]
    fn test_unreadable_match_yields_empty_record() {
        let m = json!({"unrelated": true});
        let raw = extract_match(&m);
        assert!(raw.file.is_none() && raw.line.is_none() && raw.secret.is_none());
    }
}
