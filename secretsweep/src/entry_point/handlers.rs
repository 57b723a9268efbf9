use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::cleanup::{
    build_removal_command, build_replacement_command, CleanupError, CleanupTool, NameGrouping,
    RemovalMode, RemovalTarget, ReplacementSpec, TargetKind,
};
use crate::cli::{FilterOptions, OutputOptions, PathOverrides};
use crate::config::Config;
use crate::constants::DEFAULT_MASK;
use crate::output::{
    print_plan, print_plan_json, print_report, print_report_grouped, print_report_json,
    print_report_quiet,
};
use crate::report::{normalize, Finding, NormalizeOptions, Severity};
use crate::session::{ScanSession, SessionPhase};

/// Arguments of report mode, reached bare or through the `report`
/// subcommand; both forms resolve to the same handler.
#[derive(Debug)]
pub(super) struct ReportArgs {
    pub(super) input: Option<PathBuf>,
    pub(super) output: OutputOptions,
    pub(super) filter: FilterOptions,
    pub(super) paths: PathOverrides,
}

/// Arguments of the `replace` subcommand, as resolved by the CLI layer.
#[derive(Debug)]
pub(super) struct ReplaceArgs {
    pub(super) pairs: Vec<String>,
    pub(super) map: Option<PathBuf>,
    pub(super) from_report: Option<PathBuf>,
    pub(super) mask: Option<String>,
    pub(super) list_path: Option<PathBuf>,
    pub(super) jar: Option<PathBuf>,
    pub(super) json: bool,
}

/// Arguments of the `remove` subcommand.
#[derive(Debug)]
pub(super) struct RemoveArgs {
    pub(super) names: Vec<String>,
    pub(super) paths: Vec<String>,
    pub(super) dirs: bool,
    pub(super) grouped: bool,
    pub(super) jar: Option<PathBuf>,
    pub(super) json: bool,
}

/// Reads the raw report: a file path, or stdin for `None` / `-`.
fn read_raw_report(input: Option<&Path>) -> Result<String> {
    match input.filter(|p| p.as_os_str() != "-") {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read report file {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read report from stdin")?;
            Ok(raw)
        }
    }
}

/// Normalizer options: config first, CLI overrides on top.
fn resolve_options(paths: &PathOverrides, config: &Config) -> NormalizeOptions {
    let mut opts = config.secretsweep.normalize_options();
    if let Some(prefix) = &paths.mount_prefix {
        opts.mount_prefix.clone_from(prefix);
    }
    if let Some(root) = &paths.workspace_root {
        opts.workspace_root = Some(root.clone());
    }
    opts
}

fn resolve_tool(jar: Option<PathBuf>, config: &Config) -> CleanupTool {
    jar.or_else(|| config.secretsweep.cleanup_jar.clone())
        .map_or_else(CleanupTool::default, |jar| CleanupTool { jar })
}

/// Normalizes a report and renders it.
pub(super) fn handle_report(
    args: &ReportArgs,
    config: &Config,
    writer: &mut impl Write,
) -> Result<i32> {
    let raw = read_raw_report(args.input.as_deref())?;
    let opts = resolve_options(&args.paths, config);

    let mut session = ScanSession::new();
    if let Some(root) = &opts.workspace_root {
        session.select_dir(PathBuf::from(root));
    }
    session.begin_scan()?;
    session.complete_scan(normalize(&raw, &opts))?;

    let mut findings: Vec<Finding> = session.findings().to_vec();
    if let Some(min) = args.filter.min_severity {
        let min: Severity = min.into();
        findings.retain(|finding| finding.severity >= min);
    }

    if args.output.json {
        print_report_json(writer, &findings)?;
    } else if args.output.grouped {
        print_report_grouped(writer, &findings)?;
    } else if args.output.quiet {
        print_report_quiet(writer, &findings)?;
    } else {
        print_report(writer, &findings)?;
    }

    let fail_on_high =
        args.filter.fail_on_high || config.secretsweep.fail_on_high.unwrap_or(false);
    let has_high = findings
        .iter()
        .any(|finding| finding.severity == Severity::High);
    Ok(i32::from(fail_on_high && has_high))
}

/// Builds the text-replacement command plan and writes its list artifact.
pub(super) fn handle_replace(
    args: ReplaceArgs,
    config: &Config,
    writer: &mut impl Write,
) -> Result<i32> {
    let mask = args
        .mask
        .clone()
        .or_else(|| config.secretsweep.mask.clone());

    // Sources merge in precedence order: report findings first, then the map
    // file, then explicit pairs; a later source overwrites a secret's
    // replacement from an earlier one.
    let mut session = ScanSession::new();
    let mut spec = ReplacementSpec::new();

    if let Some(report_path) = &args.from_report {
        let raw = read_raw_report(Some(report_path))?;
        session.begin_scan()?;
        session.complete_scan(normalize(&raw, &config.secretsweep.normalize_options()))?;

        if !session.findings().is_empty() {
            session.begin_cleanup()?;
            spec = ReplacementSpec::from_findings(session.findings(), mask.as_deref())?;
        }
    }

    if let Some(map_path) = &args.map {
        let text = fs::read_to_string(map_path)
            .with_context(|| format!("failed to read map file {}", map_path.display()))?;
        let mapped = ReplacementSpec::parse(&text, mask.as_deref().unwrap_or(DEFAULT_MASK))?;
        spec.merge(mapped)?;
    }

    for pair in &args.pairs {
        let Some((secret, replacement)) = pair.split_once("==>") else {
            bail!("--pair takes SECRET==>REPLACEMENT, got '{pair}'");
        };
        spec.insert(secret, replacement)?;
    }

    // Reject before touching the filesystem.
    if spec.is_empty() {
        return Err(CleanupError::EmptyReplacements.into());
    }

    let list_path = write_replacement_list(&spec, args.list_path.as_deref())?;
    let tool = resolve_tool(args.jar, config);
    let plan = build_replacement_command(&spec, &tool, &list_path)?;

    if session.phase() == SessionPhase::Cleaning {
        session.finish_cleanup()?;
    }

    writeln!(writer, "Replacement list written to {}", list_path.display())?;
    if args.json {
        print_plan_json(writer, &plan)?;
    } else {
        print_plan(writer, &plan)?;
    }
    Ok(0)
}

/// Builds the file/directory removal command plan.
pub(super) fn handle_remove(
    args: RemoveArgs,
    config: &Config,
    writer: &mut impl Write,
) -> Result<i32> {
    let kind = if args.dirs {
        TargetKind::Directory
    } else {
        TargetKind::File
    };
    let (mode, raw_targets) = if args.paths.is_empty() {
        (RemovalMode::ByName, &args.names)
    } else {
        (RemovalMode::ByPath, &args.paths)
    };
    let grouping = if args.grouped {
        NameGrouping::Grouped
    } else {
        NameGrouping::PerTarget
    };

    let targets: Vec<RemovalTarget> = raw_targets
        .iter()
        .map(|target| RemovalTarget {
            target: target.clone(),
            kind,
        })
        .collect();

    let tool = resolve_tool(args.jar, config);
    let plan = build_removal_command(&targets, mode, grouping, &tool)?;

    if args.json {
        print_plan_json(writer, &plan)?;
    } else {
        print_plan(writer, &plan)?;
    }
    Ok(0)
}

/// Writes the replacement-list artifact: to `list_path` when given, else to
/// a kept temp file whose path the command references.
fn write_replacement_list(spec: &ReplacementSpec, list_path: Option<&Path>) -> Result<PathBuf> {
    match list_path {
        Some(path) => {
            fs::write(path, spec.render())
                .with_context(|| format!("failed to write {}", path.display()))?;
            Ok(path.to_path_buf())
        }
        None => {
            let mut file = tempfile::Builder::new()
                .prefix("secretsweep-replacements-")
                .suffix(".txt")
                .tempfile()
                .context("failed to create replacement-list temp file")?;
            file.write_all(spec.render().as_bytes())
                .context("failed to write replacement list")?;
            // The external tool reads the file after this process exits.
            let (_, path) = file.keep().context("failed to keep replacement list")?;
            Ok(path)
        }
    }
}
