use crate::constants::DEFAULT_MASK;
use crate::report::Finding;
use crate::utils::is_truncated_secret;

use super::CleanupError;

/// Separator the external rewrite tool expects between a secret and its
/// replacement in the list artifact. The format has no escaping, so secrets
/// containing the separator (or newlines) cannot be represented.
const SEPARATOR: &str = "==>";

/// Ordered mapping from literal secret text to its replacement value. Built
/// from user selections at command-generation time and never persisted.
#[derive(Debug, Clone, Default)]
pub struct ReplacementSpec {
    entries: Vec<(String, String)>,
}

impl ReplacementSpec {
    /// Creates an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of replacement pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no pairs were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one pair; a repeated secret overwrites its earlier replacement.
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::SecretNotRepresentable`] for empty secrets and
    /// for secrets the unescaped list format cannot carry (embedded `==>`
    /// or newline).
    pub fn insert(
        &mut self,
        secret: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Result<(), CleanupError> {
        let secret = secret.into();
        let replacement = replacement.into();

        if secret.is_empty() {
            return Err(CleanupError::SecretNotRepresentable(
                "empty secret text".to_owned(),
            ));
        }
        if secret.contains(SEPARATOR) {
            return Err(CleanupError::SecretNotRepresentable(format!(
                "contains the '{SEPARATOR}' separator"
            )));
        }
        if secret.contains('\n') || secret.contains('\r') {
            return Err(CleanupError::SecretNotRepresentable(
                "contains a line break".to_owned(),
            ));
        }

        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| *s == secret) {
            entry.1 = replacement;
        } else {
            self.entries.push((secret, replacement));
        }
        Ok(())
    }

    /// Builds a spec mapping every distinct secret in `findings` to `mask`
    /// (the default masking value when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`CleanupError::SecretNotRepresentable`] when a finding's
    /// secret was display-truncated: rewriting history with a 50-character
    /// prefix would corrupt content, so the caller must supply the full
    /// literal instead.
    pub fn from_findings(findings: &[Finding], mask: Option<&str>) -> Result<Self, CleanupError> {
        let mask = mask.unwrap_or(DEFAULT_MASK);
        let mut spec = Self::new();
        for finding in findings {
            if is_truncated_secret(&finding.secret) {
                return Err(CleanupError::SecretNotRepresentable(format!(
                    "'{}' was truncated for display; pass the full literal explicitly",
                    finding.secret
                )));
            }
            spec.insert(finding.secret.clone(), mask)?;
        }
        Ok(spec)
    }

    /// Renders the replacement-list artifact: one `secret==>replacement`
    /// line per pair, in insertion order.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (secret, replacement) in &self.entries {
            out.push_str(secret);
            out.push_str(SEPARATOR);
            out.push_str(replacement);
            out.push('\n');
        }
        out
    }

    /// Parses replacement-list text back into a spec. Lines without the
    /// separator map the whole line (a bare secret) to `default_mask`,
    /// matching how the external tool treats them.
    ///
    /// # Errors
    ///
    /// Propagates [`CleanupError::SecretNotRepresentable`] from `insert`.
    pub fn parse(text: &str, default_mask: &str) -> Result<Self, CleanupError> {
        let mut spec = Self::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            match line.split_once(SEPARATOR) {
                Some((secret, replacement)) => spec.insert(secret, replacement)?,
                None => spec.insert(line, default_mask)?,
            }
        }
        Ok(spec)
    }

    /// Folds `other` into this spec; a secret present in both keeps the
    /// replacement from `other`.
    ///
    /// # Errors
    ///
    /// Propagates [`CleanupError::SecretNotRepresentable`] from `insert`.
    pub fn merge(&mut self, other: Self) -> Result<(), CleanupError> {
        for (secret, replacement) in other.entries {
            self.insert(secret, replacement)?;
        }
        Ok(())
    }
}
