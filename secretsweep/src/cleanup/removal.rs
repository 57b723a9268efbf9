use super::command::{aggressive_gc, reflog_expire, CleanupTool, CommandLine, CommandPlan};
use super::CleanupError;

/// How removal targets are matched against history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalMode {
    /// Match by base name anywhere in history, independent of path. A
    /// directory target removes every historical folder sharing the name.
    ByName,
    /// Match by exact repository-relative path. The caller must have already
    /// resolved per-branch matches; the builder just emits the arguments.
    ByPath,
}

/// Whether a target is a file or a directory; name-based removal uses
/// different flags for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A file target.
    File,
    /// A directory target.
    Directory,
}

/// One thing to delete from history: a bare name or a repo-relative path,
/// depending on the removal mode. Transient; built per command generation.
#[derive(Debug, Clone)]
pub struct RemovalTarget {
    /// Bare name (name-based mode) or repository-relative path (path-based).
    pub target: String,
    /// File or directory.
    pub kind: TargetKind,
}

/// Grouping of name-based invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameGrouping {
    /// One rewrite invocation per target.
    PerTarget,
    /// A single invocation per kind, names pipe-delimited.
    Grouped,
}

/// Builds the removal command plan: the delete invocation(s) followed by
/// reflog expiration and aggressive garbage collection.
///
/// # Errors
///
/// Returns [`CleanupError::EmptyTargets`] for an empty target set, and
/// [`CleanupError::PathInNameTarget`] when a name-based target carries a
/// path separator.
pub fn build_removal_command(
    targets: &[RemovalTarget],
    mode: RemovalMode,
    grouping: NameGrouping,
    tool: &CleanupTool,
) -> Result<CommandPlan, CleanupError> {
    if targets.is_empty() {
        return Err(CleanupError::EmptyTargets);
    }

    let mut steps = match mode {
        RemovalMode::ByName => by_name_steps(targets, grouping, tool)?,
        RemovalMode::ByPath => vec![by_path_step(targets)],
    };
    steps.push(reflog_expire());
    steps.push(aggressive_gc());

    Ok(CommandPlan { steps })
}

fn delete_flag(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::File => "--delete-files",
        TargetKind::Directory => "--delete-folders",
    }
}

fn by_name_steps(
    targets: &[RemovalTarget],
    grouping: NameGrouping,
    tool: &CleanupTool,
) -> Result<Vec<CommandLine>, CleanupError> {
    for target in targets {
        if target.target.contains('/') || target.target.contains('\\') {
            return Err(CleanupError::PathInNameTarget(target.target.clone()));
        }
    }

    let steps = match grouping {
        NameGrouping::PerTarget => targets
            .iter()
            .map(|target| {
                tool.invocation()
                    .arg(delete_flag(target.kind))
                    .arg(target.target.clone())
            })
            .collect(),
        NameGrouping::Grouped => {
            // One invocation per kind; the tool takes alternatives
            // pipe-delimited in a single flag value.
            let mut steps = Vec::new();
            for kind in [TargetKind::File, TargetKind::Directory] {
                let names: Vec<&str> = targets
                    .iter()
                    .filter(|t| t.kind == kind)
                    .map(|t| t.target.as_str())
                    .collect();
                if names.is_empty() {
                    continue;
                }
                steps.push(
                    tool.invocation()
                        .arg(delete_flag(kind))
                        .arg(names.join("|")),
                );
            }
            steps
        }
    };
    Ok(steps)
}

/// Path-based removal goes through the path-aware history filter rather
/// than the name-matching jar.
fn by_path_step(targets: &[RemovalTarget]) -> CommandLine {
    let mut step = CommandLine::new("git")
        .arg("filter-repo")
        .arg("--force")
        .arg("--invert-paths");
    for target in targets {
        step = step.arg("--path").arg(target.target.clone());
    }
    step
}
