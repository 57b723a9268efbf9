//! End-to-end remediation command generation through the CLI entry point.

#![allow(clippy::unwrap_used)]

use std::fs;

use secretsweep::cleanup::CommandPlan;
use secretsweep::entry_point::run_with_args_to;
use tempfile::tempdir;

fn run(args: &[&str]) -> anyhow::Result<(i32, String)> {
    let mut out = Vec::new();
    let code = run_with_args_to(args.iter().map(|s| (*s).to_owned()).collect(), &mut out)?;
    Ok((code, String::from_utf8(out).expect("utf8 output")))
}

#[test]
fn test_replace_pair_writes_list_and_prints_plan() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("replacements.txt");
    let list_arg = list.to_string_lossy().into_owned();

    let (code, out) = run(&[
        "replace",
        "--pair",
        "sk_test_123==>*****",
        "--list-path",
        &list_arg,
    ])
    .expect("replace succeeds");
    assert_eq!(code, 0);

    assert_eq!(fs::read_to_string(&list).unwrap(), "sk_test_123==>*****\n");
    assert!(out.contains("--replace-text"));
    let reflog_at = out.find("reflog expire").unwrap();
    let gc_at = out.find("gc --prune=now --aggressive").unwrap();
    assert!(out.find("--replace-text").unwrap() < reflog_at);
    assert!(reflog_at < gc_at);
}

#[test]
fn test_replace_without_sources_is_an_error() {
    let err = run(&["replace"]).expect_err("empty mapping must fail");
    assert!(
        err.to_string().contains("no replacement pairs"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_replace_json_plan_is_structured() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("list.txt");
    let list_arg = list.to_string_lossy().into_owned();

    let (code, out) = run(&[
        "replace",
        "--pair",
        "abc==>xyz",
        "--list-path",
        &list_arg,
        "--json",
    ])
    .expect("replace succeeds");
    assert_eq!(code, 0);

    // First line announces the artifact; the rest is the JSON plan.
    let json_start = out.find('{').unwrap();
    let plan: CommandPlan = serde_json::from_str(&out[json_start..]).expect("valid plan JSON");
    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.steps[0].program, "java");
    assert_eq!(plan.steps[1].program, "git");
}

#[test]
fn test_replace_from_report_masks_secrets() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("report.json");
    fs::write(
        &report,
        r#"{"matches": [
            {"file": "a.py", "match_value": "sk_live_1", "rule": "token"},
            {"file": "b.py", "match_value": "sk_live_2", "rule": "token"}
        ]}"#,
    )
    .unwrap();
    let list = dir.path().join("list.txt");

    let (code, _) = run(&[
        "replace",
        "--from-report",
        &report.to_string_lossy(),
        "--mask",
        "#gone#",
        "--list-path",
        &list.to_string_lossy(),
    ])
    .expect("replace succeeds");
    assert_eq!(code, 0);

    let artifact = fs::read_to_string(&list).unwrap();
    assert!(artifact.contains("sk_live_1==>#gone#"));
    assert!(artifact.contains("sk_live_2==>#gone#"));
}

#[test]
fn test_replace_pair_overrides_report_mask() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("report.json");
    fs::write(
        &report,
        r#"{"matches": [{"file": "a.py", "match_value": "sk_live_1"}]}"#,
    )
    .unwrap();
    let list = dir.path().join("list.txt");

    let (code, _) = run(&[
        "replace",
        "--from-report",
        &report.to_string_lossy(),
        "--pair",
        "sk_live_1==>CUSTOM",
        "--list-path",
        &list.to_string_lossy(),
    ])
    .expect("replace succeeds");
    assert_eq!(code, 0);

    assert_eq!(
        fs::read_to_string(&list).unwrap(),
        "sk_live_1==>CUSTOM\n",
        "explicit pair wins over report-derived mask"
    );
}

#[test]
fn test_replace_map_bare_lines_take_mask() {
    let dir = tempdir().unwrap();
    let map = dir.path().join("map.txt");
    fs::write(&map, "sk_bare\nsk_two==>XX\n").unwrap();
    let list = dir.path().join("list.txt");

    let (code, _) = run(&[
        "replace",
        "--map",
        &map.to_string_lossy(),
        "--mask",
        "#m#",
        "--list-path",
        &list.to_string_lossy(),
    ])
    .expect("replace succeeds");
    assert_eq!(code, 0);

    let artifact = fs::read_to_string(&list).unwrap();
    assert!(artifact.contains("sk_bare==>#m#"), "bare line masked: {artifact}");
    assert!(artifact.contains("sk_two==>XX"));
}

#[test]
fn test_remove_by_name_per_target() {
    let (code, out) = run(&["remove", "--name", "id_rsa", "--name", ".env"]).expect("builds");
    assert_eq!(code, 0);
    assert!(out.contains("--delete-files id_rsa"));
    assert!(out.contains("--delete-files .env"));
    assert!(out.contains("reflog expire"));
}

#[test]
fn test_remove_grouped_dirs_pipe_delimited() {
    let (code, out) =
        run(&["remove", "--name", ".aws", "--name", ".ssh", "--dirs", "--grouped"])
            .expect("builds");
    assert_eq!(code, 0);
    assert!(
        out.contains("--delete-folders '.aws|.ssh'") || out.contains("--delete-folders .aws|.ssh"),
        "grouped names joined with a pipe: {out}"
    );
}

#[test]
fn test_remove_by_path_uses_history_filter() {
    let (code, out) =
        run(&["remove", "--path", "config/secrets.yml", "--path", "deploy/keys"]).expect("builds");
    assert_eq!(code, 0);
    assert!(out.contains("filter-repo"));
    assert!(out.contains("--invert-paths"));
    assert!(out.contains("--path config/secrets.yml"));
}

#[test]
fn test_remove_without_targets_is_an_error() {
    let err = run(&["remove"]).expect_err("empty target set must fail");
    assert!(err.to_string().contains("no removal targets"));
}

#[test]
fn test_remove_mixing_name_and_path_is_usage_error() {
    let (code, _) = run(&["remove", "--name", "id_rsa", "--path", "a/b"])
        .expect("clap conflict is reported as an exit code");
    assert_eq!(code, 2);
}

#[test]
fn test_custom_jar_is_referenced() {
    let dir = tempdir().unwrap();
    let list = dir.path().join("list.txt");
    let (code, out) = run(&[
        "replace",
        "--pair",
        "a==>b",
        "--jar",
        "tools/cleaner.jar",
        "--list-path",
        &list.to_string_lossy(),
    ])
    .expect("builds");
    assert_eq!(code, 0);
    assert!(out.contains("tools/cleaner.jar"));
}
