use serde::Deserialize;
use std::path::PathBuf;

use crate::report::{NormalizeOptions, SeverityKeywords};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for secretsweep.
    pub secretsweep: SecretSweepConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for secretsweep.
pub struct SecretSweepConfig {
    /// Replacement value used when none is given per secret.
    pub mask: Option<String>,
    /// Container mount prefix stripped from reported paths.
    pub mount_prefix: Option<String>,
    /// Workspace root stripped from reported paths.
    pub workspace_root: Option<String>,
    /// Path to the external history-rewrite jar.
    pub cleanup_jar: Option<PathBuf>,
    /// Display cap for secret text, in characters.
    pub max_secret_length: Option<usize>,
    /// Exit non-zero when high-severity findings are present.
    pub fail_on_high: Option<bool>,
    /// Override for the high-risk rule-name keywords.
    pub high_risk_keywords: Option<Vec<String>>,
    /// Override for the medium-risk rule-name keywords.
    pub medium_risk_keywords: Option<Vec<String>>,
}

impl SecretSweepConfig {
    /// Builds normalizer options from this configuration; unset keys fall
    /// back to the built-in defaults.
    #[must_use]
    pub fn normalize_options(&self) -> NormalizeOptions {
        let defaults = NormalizeOptions::default();
        let mut keywords = SeverityKeywords::default();
        if let Some(high) = &self.high_risk_keywords {
            keywords.high = high.iter().map(|kw| kw.to_lowercase()).collect();
        }
        if let Some(medium) = &self.medium_risk_keywords {
            keywords.medium = medium.iter().map(|kw| kw.to_lowercase()).collect();
        }

        NormalizeOptions {
            mount_prefix: self
                .mount_prefix
                .clone()
                .unwrap_or(defaults.mount_prefix),
            workspace_root: self.workspace_root.clone(),
            max_secret_len: self.max_secret_length.unwrap_or(defaults.max_secret_len),
            keywords,
        }
    }
}
