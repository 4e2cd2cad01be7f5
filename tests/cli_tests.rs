//! End-to-end tests that run the setup-env binary.
//!
//! The child gets a cleared environment and a TempDir as its working
//! directory, so stdout/stderr separation and the default `env.yml` path are
//! exercised exactly as a deployment step would see them.

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TEMPLATE: &str = "\
http:
  listen_addr: ':8080'
database:
  host: localhost
  db_name: zen
  user: root
  password: secret
cache:
  host: 127.0.0.1
zendesk:
  auth_token: abc
datadog:
  enable: true
  env: development
";

fn setup(content: &str) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp.path().join("env.yml"), content).expect("Failed to write env.yml");
    temp
}

fn run(dir: &Path, args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_setup-env"))
        .args(args)
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(dir)
        .output()
        .expect("Failed to run setup-env")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_dry_run_stdout_is_only_the_document() {
    let temp = setup(TEMPLATE);
    let output = run(temp.path(), &["apply", "--dry-run"], &[("PORT", "8080")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let root: Mapping = serde_yaml::from_str(&out).expect("dry run stdout is not YAML");
    let http = root.get("http").and_then(Value::as_mapping).unwrap();
    assert_eq!(http.get("listen_addr"), Some(&Value::String("8080".into())));
    assert!(!out.contains('\u{1b}'));
    assert!(!out.contains("INFO"));

    // Diagnostics moved to stderr, and the file is untouched
    assert!(stderr(&output).contains("deploy_env is not production"));
    assert_eq!(fs::read_to_string(temp.path().join("env.yml")).unwrap(), TEMPLATE);
}

#[test]
fn test_json_summary_stdout_parses() {
    let temp = setup(TEMPLATE);
    let output = run(
        temp.path(),
        &["apply", "--json"],
        &[("ENV", "production"), ("PROD_DB_HOST", "dbprod")],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let summary: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("--json stdout is not JSON");
    assert_eq!(summary["deploy_env"], "production");
    assert_eq!(summary["set_fields"][0], "database.host");
    assert_eq!(summary["written"], true);
}

#[test]
fn test_no_args_logs_two_plain_lines_to_stdout() {
    let temp = setup(TEMPLATE);
    let output = run(temp.path(), &[], &[("STAGING_DB_HOST", "db1")]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "stdout: {}", out);
    assert!(lines[0].contains("deploy_env is not production, using STAGING variables"));
    assert!(lines[1].contains("env.yml setup completed"));
    // Piped output carries no colour codes
    assert!(!out.contains('\u{1b}'));

    let written = fs::read_to_string(temp.path().join("env.yml")).unwrap();
    assert!(written.contains("host: db1"));
}

#[test]
fn test_missing_section_fails_without_writing() {
    let content = TEMPLATE.replace("cache:\n  host: 127.0.0.1\n", "");
    let temp = setup(&content);
    let output = run(temp.path(), &[], &[("PORT", "8080")]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("missing required section `cache`"));
    assert_eq!(fs::read_to_string(temp.path().join("env.yml")).unwrap(), content);
}
