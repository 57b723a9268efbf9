use std::fs;

use tempfile::tempdir;

use super::Config;

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempdir().expect("tempdir");
    let config = Config::load_from_path(dir.path());
    assert!(config.config_file_path.is_none());
    assert!(config.secretsweep.mask.is_none());

    let opts = config.secretsweep.normalize_options();
    assert_eq!(opts.mount_prefix, "/scan/");
    assert_eq!(opts.max_secret_len, 50);
}

#[test]
fn test_config_found_in_ancestor_directory() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".secretsweep.toml"),
        r##"
[secretsweep]
mask = "#masked#"
mount_prefix = "/repo/"
max_secret_length = 20
"##,
    )
    .expect("write config");

    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).expect("mkdirs");

    let config = Config::load_from_path(&nested);
    assert!(config.config_file_path.is_some());
    assert_eq!(config.secretsweep.mask.as_deref(), Some("#masked#"));

    let opts = config.secretsweep.normalize_options();
    assert_eq!(opts.mount_prefix, "/repo/");
    assert_eq!(opts.max_secret_len, 20);
}

#[test]
fn test_keyword_overrides_are_lowercased() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join(".secretsweep.toml"),
        r#"
[secretsweep]
high_risk_keywords = ["JWT", "Bearer"]
"#,
    )
    .expect("write config");

    let config = Config::load_from_path(dir.path());
    let opts = config.secretsweep.normalize_options();
    assert_eq!(opts.keywords.high.len(), 2);
    assert!(opts.keywords.high.contains("jwt"));
    assert!(opts.keywords.high.contains("bearer"));
    // Medium set untouched by a high-only override.
    assert!(opts.keywords.medium.contains("url"));
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join(".secretsweep.toml"), "not [valid toml").expect("write config");

    let config = Config::load_from_path(dir.path());
    assert!(config.config_file_path.is_none());
}
