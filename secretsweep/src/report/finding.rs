use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a normalized finding, keyword-derived from the rule name.
///
/// Ordered so that comparisons follow risk: `Info < Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational only (synthetic findings, no detected secret).
    Info,
    /// Detector matched, but the rule name suggests low-stakes material.
    Low,
    /// Default for unknown rules and free-text recoveries.
    Medium,
    /// Rule name names credential-grade material.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Info => "INFO",
        };
        write!(f, "{label}")
    }
}

/// One detected secret occurrence, normalized from scanner output.
///
/// Immutable once produced; a fresh scan replaces the whole collection
/// rather than merging into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Repository-relative path when derivable, otherwise as reported.
    pub file: String,
    /// Line number (1-indexed, 1 when unknown).
    pub line: usize,
    /// Matched secret text, display-capped at 50 characters.
    pub secret: String,
    /// Human-readable detector label.
    pub rule: String,
    /// Keyword-derived severity.
    pub severity: Severity,
}
