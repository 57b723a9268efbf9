//! Small helpers shared by the normalizer and the output layer.

use crate::constants::TRUNCATION_MARKER;

/// Normalizes a scanner-reported path for display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips the workspace root, when one is known, to yield a repo-relative path
/// - Strips the container mount prefix (e.g. a leading `/scan/`)
/// - Strips a leading "./"
///
/// Paths that match none of the prefixes are returned as reported.
///
/// # Examples
/// ```
/// use secretsweep::utils::normalize_report_path;
///
/// assert_eq!(normalize_report_path("/scan/src/db.py", "/scan/", None), "src/db.py");
/// assert_eq!(
///     normalize_report_path("/home/me/repo/src/db.py", "/scan/", Some("/home/me/repo")),
///     "src/db.py"
/// );
/// assert_eq!(normalize_report_path(".\\src\\db.py", "/scan/", None), "src/db.py");
/// ```
#[must_use]
pub fn normalize_report_path(path: &str, mount_prefix: &str, workspace_root: Option<&str>) -> String {
    let mut normalized = path.replace('\\', "/");

    if let Some(root) = workspace_root {
        let root = root.replace('\\', "/");
        let root = root.trim_end_matches('/');
        if !root.is_empty() {
            if let Some(rest) = normalized.strip_prefix(root) {
                normalized = rest.trim_start_matches('/').to_owned();
            }
        }
    }

    if !mount_prefix.is_empty() {
        if let Some(rest) = normalized.strip_prefix(mount_prefix) {
            normalized = rest.to_owned();
        }
    }

    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Caps secret text at `max_chars` characters, appending the truncation
/// marker when the input was longer. Text at or under the cap is unchanged.
///
/// Operates on characters, not bytes, so multi-byte secrets never get cut
/// mid-codepoint.
#[must_use]
pub fn truncate_secret(secret: &str, max_chars: usize) -> String {
    if secret.chars().count() <= max_chars {
        return secret.to_owned();
    }
    let mut truncated: String = secret.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Returns `true` when the displayed secret was cut by [`truncate_secret`].
///
/// Heuristic: a genuine secret ending in the marker is indistinguishable
/// from a truncated one, so callers treating this as authoritative must
/// fail safe (see `ReplacementSpec::from_findings`).
#[must_use]
pub fn is_truncated_secret(secret: &str) -> bool {
    secret.ends_with(TRUNCATION_MARKER)
}
