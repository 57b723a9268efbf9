//! secretsweep — normalize external secret-scanner reports and build
//! git-history remediation commands.
//!
//! The scanner and the history-rewrite tool are external collaborators: this
//! crate never invokes them. It turns whatever report text the scanner
//! produced into a uniform list of [`report::Finding`]s, and turns a set of
//! selected findings into a [`cleanup::CommandPlan`] the user can run.

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod entry_point;
pub mod output;
pub mod report;
pub mod session;
pub mod utils;
