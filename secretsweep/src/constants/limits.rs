/// Configuration file searched for by upward traversal from the target path.
pub const CONFIG_FILENAME: &str = ".secretsweep.toml";

/// Maximum number of secret characters kept for display.
pub const MAX_SECRET_DISPLAY_LEN: usize = 50;

/// Marker appended to secrets cut at [`MAX_SECRET_DISPLAY_LEN`].
pub const TRUNCATION_MARKER: &str = "...";

/// Replacement value used when the user does not pick one.
pub const DEFAULT_MASK: &str = "***REMOVED***";

/// Placeholder secret for findings recovered from free text, where the
/// scanner already redacted (or never printed) the matched value.
pub const HIDDEN_SECRET: &str = "***hidden***";

/// Rule label used when the scanner did not report one.
pub const DEFAULT_RULE_LABEL: &str = "Secret detected";

/// File label for the synthetic marker-fallback finding, which has no
/// location of its own.
pub const SYNTHETIC_FILE_LABEL: &str = "scan-output";

/// Container mount point the scanner sees the repository under; reports
/// frequently carry paths with this prefix.
pub const DEFAULT_MOUNT_PREFIX: &str = "/scan/";
