//! Command line interface definition.

mod commands;
mod options;

pub use commands::Commands;
pub use options::{FilterOptions, OutputOptions, PathOverrides, SeverityArg};

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.secretsweep.toml):
  Create this file in your project root to set defaults.

  [secretsweep]
  mask = \"***REMOVED***\"        # Replacement value for masked secrets
  mount_prefix = \"/scan/\"       # Container mount prefix stripped from paths
  workspace_root = \"/home/me/repo\"  # Workspace prefix stripped from paths
  cleanup_jar = \"tools/bfg.jar\" # Path to the history-rewrite jar
  max_secret_length = 50        # Display cap for secret text
  fail_on_high = true           # Exit 1 when high-severity findings exist

  # Severity keyword overrides (substring match on rule names)
  high_risk_keywords = [\"api_key\", \"secret_key\", \"private_key\", \"password\", \"token\"]
  medium_risk_keywords = [\"url\", \"connection_string\", \"config\"]
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "secretsweep - Normalize secret-scanner reports and build git-history remediation commands",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute (report, replace, remove); none means
    /// report mode.
    pub command: Option<Commands>,

    /// Raw scanner report to normalize ("-" or omitted reads stdin).
    pub input: Option<PathBuf>,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,

    /// Finding filter options.
    #[command(flatten)]
    pub filter: FilterOptions,

    /// Path-normalization overrides.
    #[command(flatten)]
    pub paths: PathOverrides,
}
