use regex::Regex;
use std::sync::OnceLock;

/// Returns the compiled free-text report patterns, tried in order against
/// each line of a report that produced no JSON findings.
///
/// Every pattern captures the file path in group 1 and, optionally, the line
/// number in group 2.
pub fn get_fallback_report_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    #[allow(clippy::expect_used)]
    PATTERNS.get_or_init(|| {
        [
            // "Found 1 secret in src/config.py:12"
            r"(?i)\bfound\b.*?\bsecrets?\b.*?\bin\b\s+([^\s:]+):(\d+)",
            // "secret detected in src/config.py" (line optional)
            r"(?i)\bsecrets?\b.*?\bdetected\b.*?\bin\b\s+([^\s:]+?)(?::(\d+))?\s*$",
            // grep-style "src/config.py:12: ... api key ..."
            r"(?i)^\s*([^\s:]+):(\d+)[:\s].*\b(?:secret|token|password|api.?key)\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("invalid fallback report pattern"))
        .collect()
    })
}
