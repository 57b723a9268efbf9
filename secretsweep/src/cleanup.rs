//! Remediation command building for the external history-rewrite tool.
//!
//! Everything here produces data: structured program/argument vectors and the
//! replacement-list text. No process is spawned and no repository is touched;
//! executing the plan (and handling its failures) belongs to the caller.

mod command;
mod removal;
mod replacement;

use std::fmt;

pub use command::{build_replacement_command, CleanupTool, CommandLine, CommandPlan};
pub use removal::{
    build_removal_command, NameGrouping, RemovalMode, RemovalTarget, TargetKind,
};
pub use replacement::ReplacementSpec;

/// Errors raised while assembling a remediation command. These are the only
/// failures the builder produces; they must reach the user before anything
/// destructive is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupError {
    /// No replacement pairs were supplied.
    EmptyReplacements,
    /// No removal targets were supplied.
    EmptyTargets,
    /// A secret cannot be written into the replacement-list artifact
    /// (embedded separator or newline, or display-truncated text).
    SecretNotRepresentable(String),
    /// A name-based removal target contained a path separator.
    PathInNameTarget(String),
}

impl fmt::Display for CleanupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupError::EmptyReplacements => {
                write!(f, "no replacement pairs selected; nothing to rewrite")
            }
            CleanupError::EmptyTargets => {
                write!(f, "no removal targets selected; nothing to delete")
            }
            CleanupError::SecretNotRepresentable(reason) => {
                write!(f, "secret cannot go into the replacement list: {reason}")
            }
            CleanupError::PathInNameTarget(target) => {
                write!(
                    f,
                    "'{target}' contains a path separator; name-based removal takes bare names \
                     (use path-based removal for exact paths)"
                )
            }
        }
    }
}

impl std::error::Error for CleanupError {}
