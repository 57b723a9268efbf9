use clap::Subcommand;
use std::path::PathBuf;

use super::options::{FilterOptions, OutputOptions, PathOverrides};

/// Subcommands. `report` is also the implicit default when the first
/// argument is not a subcommand name; the remediation subcommands only
/// generate command text, nothing is executed and no repository is modified.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize a raw scanner report and render the findings (the default)
    Report {
        /// Raw scanner report to normalize ("-" or omitted reads stdin).
        input: Option<PathBuf>,

        /// Output formatting options.
        #[command(flatten)]
        output: OutputOptions,

        /// Finding filter options.
        #[command(flatten)]
        filter: FilterOptions,

        /// Path-normalization overrides.
        #[command(flatten)]
        paths: PathOverrides,
    },

    /// Build the text-replacement command for the history-rewrite tool
    Replace {
        /// One secret and its replacement, separated by "==>". Repeatable.
        #[arg(long = "pair", value_name = "SECRET==>REPLACEMENT")]
        pairs: Vec<String>,

        /// Replacement-list file to load pairs from (same one-per-line format).
        #[arg(long)]
        map: Option<PathBuf>,

        /// Scanner report to take secrets from; each detected secret is
        /// mapped to the mask value.
        #[arg(long)]
        from_report: Option<PathBuf>,

        /// Replacement value for secrets without an explicit one.
        #[arg(long)]
        mask: Option<String>,

        /// Where to write the replacement-list artifact (temp file if omitted).
        #[arg(long)]
        list_path: Option<PathBuf>,

        /// Path to the history-rewrite jar (overrides config).
        #[arg(long)]
        jar: Option<PathBuf>,

        /// Emit the plan as structured JSON instead of shell text.
        #[arg(long)]
        json: bool,
    },

    /// Build the file/directory removal command
    Remove {
        /// Bare name to delete across all of history, path-independent.
        /// Repeatable.
        #[arg(long = "name")]
        names: Vec<String>,

        /// Exact repository-relative path to delete. Repeatable; conflicts
        /// with --name.
        #[arg(long = "path", conflicts_with = "names")]
        paths: Vec<String>,

        /// Treat the named targets as directories.
        #[arg(long)]
        dirs: bool,

        /// Collapse name-based targets into one pipe-delimited invocation.
        #[arg(long)]
        grouped: bool,

        /// Path to the history-rewrite jar (overrides config).
        #[arg(long)]
        jar: Option<PathBuf>,

        /// Emit the plan as structured JSON instead of shell text.
        #[arg(long)]
        json: bool,
    },
}
