use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use super::replacement::ReplacementSpec;
use super::CleanupError;

/// One external invocation as structured data: a program plus its argument
/// vector. Rendering to shell text is display-only; callers that execute the
/// plan should pass the vector to their process API untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandLine {
    /// Program to invoke.
    pub program: String,
    /// Arguments, unquoted and unescaped.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Creates a command with no arguments yet.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// A sequence of invocations meant to run in order; each step only makes
/// sense if the previous one succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandPlan {
    /// Ordered invocations.
    pub steps: Vec<CommandLine>,
}

impl fmt::Display for CommandPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" && "))
    }
}

/// Paths of the external rewrite tooling referenced by generated commands.
#[derive(Debug, Clone)]
pub struct CleanupTool {
    /// History-rewrite jar, referenced by relative path.
    pub jar: PathBuf,
}

impl Default for CleanupTool {
    fn default() -> Self {
        Self {
            jar: PathBuf::from("bfg.jar"),
        }
    }
}

impl CleanupTool {
    /// Base invocation of the rewrite jar.
    pub(super) fn invocation(&self) -> CommandLine {
        CommandLine::new("java")
            .arg("-jar")
            .arg(self.jar.to_string_lossy())
    }
}

/// Builds the text-replacement command plan: one rewrite invocation reading
/// the replacement-list artifact at `list_path`, then reflog expiration,
/// then aggressive garbage collection, in that order.
///
/// # Errors
///
/// Returns [`CleanupError::EmptyReplacements`] when `spec` holds no pairs.
pub fn build_replacement_command(
    spec: &ReplacementSpec,
    tool: &CleanupTool,
    list_path: &Path,
) -> Result<CommandPlan, CleanupError> {
    if spec.is_empty() {
        return Err(CleanupError::EmptyReplacements);
    }

    let rewrite = tool
        .invocation()
        .arg("--replace-text")
        .arg(list_path.to_string_lossy());

    Ok(CommandPlan {
        steps: vec![rewrite, reflog_expire(), aggressive_gc()],
    })
}

/// `git reflog expire --expire=now --all`: drops the pre-rewrite refs so the
/// old objects become collectable.
pub(super) fn reflog_expire() -> CommandLine {
    CommandLine::new("git")
        .arg("reflog")
        .arg("expire")
        .arg("--expire=now")
        .arg("--all")
}

/// `git gc --prune=now --aggressive`: actually removes the rewritten-away
/// objects from the repository.
pub(super) fn aggressive_gc() -> CommandLine {
    CommandLine::new("git")
        .arg("gc")
        .arg("--prune=now")
        .arg("--aggressive")
}

/// Quotes one word for display in a POSIX shell. Plain words pass through;
/// anything else gets single quotes with embedded quotes escaped.
fn shell_quote(word: &str) -> Cow<'_, str> {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | ':'));
    if plain {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
    }
}
