use super::finding::Severity;
use super::normalizer::SeverityKeywords;

/// Classifies a rule name into a severity by case-insensitive substring
/// matching against the configured keyword sets.
///
/// The high-risk set is checked before the medium-risk set, so a rule name
/// containing keywords from both classifies as high. A rule name matching
/// neither set is low. A missing (or empty) rule name is medium: the scanner
/// gave no signal either way, whereas an unmatched-but-present name is
/// affirmative evidence of a low-stakes detector.
#[must_use]
pub fn classify_rule(rule: Option<&str>, keywords: &SeverityKeywords) -> Severity {
    let Some(rule) = rule.filter(|r| !r.trim().is_empty()) else {
        return Severity::Medium;
    };
    let rule = rule.to_lowercase();

    if keywords.high.iter().any(|kw| rule.contains(kw.as_str())) {
        return Severity::High;
    }
    if keywords.medium.iter().any(|kw| rule.contains(kw.as_str())) {
        return Severity::Medium;
    }
    Severity::Low
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> SeverityKeywords {
        SeverityKeywords::default()
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            classify_rule(Some("GitHub Personal TOKEN"), &defaults()),
            Severity::High
        );
        assert_eq!(
            classify_rule(Some("Database URL"), &defaults()),
            Severity::Medium
        );
    }

    #[test]
    fn test_high_risk_wins_over_medium_risk() {
        // Contains both "url" (medium) and "token" (high); high is checked first.
        assert_eq!(
            classify_rule(Some("token_in_url"), &defaults()),
            Severity::High
        );
        assert_eq!(
            classify_rule(Some("URL with api_key"), &defaults()),
            Severity::High
        );
    }

    #[test]
    fn test_unmatched_rule_is_low() {
        assert_eq!(
            classify_rule(Some("generic entropy match"), &defaults()),
            Severity::Low
        );
    }

    #[test]
    fn test_missing_rule_is_medium() {
        assert_eq!(classify_rule(None, &defaults()), Severity::Medium);
        assert_eq!(classify_rule(Some("   "), &defaults()), Severity::Medium);
    }
}
