use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Returns rule-name keywords that classify a finding as high severity.
///
/// Checked before the medium-risk set, so a rule name containing keywords
/// from both sets classifies as high.
pub fn get_high_risk_keywords() -> &'static FxHashSet<&'static str> {
    static KEYWORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    KEYWORDS.get_or_init(|| {
        ["api_key", "secret_key", "private_key", "password", "token"]
            .into_iter()
            .collect()
    })
}

/// Returns rule-name keywords that classify a finding as medium severity.
pub fn get_medium_risk_keywords() -> &'static FxHashSet<&'static str> {
    static KEYWORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    KEYWORDS.get_or_init(|| ["url", "connection_string", "config"].into_iter().collect())
}

/// Returns substrings whose presence in otherwise unparseable report text
/// still indicates the scan ran (marker fallback).
pub fn get_marker_keywords() -> &'static FxHashSet<&'static str> {
    static KEYWORDS: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    KEYWORDS.get_or_init(|| ["secret", "finding"].into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_sets_are_disjoint() {
        assert!(get_high_risk_keywords().contains("token"));
        assert!(get_medium_risk_keywords().contains("url"));
        assert!(get_high_risk_keywords()
            .intersection(get_medium_risk_keywords())
            .next()
            .is_none());
    }
}
