use clap::Args;

use crate::report::Severity;

/// Minimum severity accepted by `--min-severity`.
#[derive(Debug, Clone, Copy, clap::ValueEnum, PartialEq, Eq)]
pub enum SeverityArg {
    /// Keep everything, including synthetic informational findings.
    Info,
    /// Keep low severity and above.
    Low,
    /// Keep medium severity and above.
    Medium,
    /// Keep only high-severity findings.
    High,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Low => Severity::Low,
            SeverityArg::Medium => Severity::Medium,
            SeverityArg::High => Severity::High,
        }
    }
}

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Group findings by file instead of one table.
    #[arg(long, conflicts_with = "json")]
    pub grouped: bool,

    /// Quiet mode: show only the severity summary (no detailed tables).
    #[arg(long, conflicts_with_all = ["json", "grouped"])]
    pub quiet: bool,
}

/// Options filtering which findings are reported.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterOptions {
    /// Drop findings below this severity.
    #[arg(long, value_enum)]
    pub min_severity: Option<SeverityArg>,

    /// Exit with code 1 if any high-severity finding remains.
    /// For CI/CD integration.
    #[arg(long)]
    pub fail_on_high: bool,
}

/// Overrides for report path normalization (take precedence over config).
#[derive(Args, Debug, Default, Clone)]
pub struct PathOverrides {
    /// Container mount prefix to strip from reported paths.
    #[arg(long)]
    pub mount_prefix: Option<String>,

    /// Workspace root to strip from reported paths.
    #[arg(long)]
    pub workspace_root: Option<String>,
}
