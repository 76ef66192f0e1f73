//! End-to-end tests for the `objcdef` binary.
//!
//! Each test writes a graph file into a temp dir and points the config
//! directory there too, so a user config cannot leak into the results.
//!
//! Run with: cargo test -p objcdef-cli --test cli

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

const GRAPH_JSON: &str = r#"{
  "Defs": [
    {"UnitType": "ObjectiveC", "Path": "AppDelegate", "Name": "AppDelegate", "Kind": "CLASS"},
    {"UnitType": "ObjectiveC", "Path": "AppDelegate/window", "Name": "window", "Kind": "VAR"},
    {"Path": "Direction", "Name": "Direction", "Kind": "ENUM"},
    {"UnitType": "ObjectiveC", "Path": "AppDelegate/viewDidLoad", "Name": "viewDidLoad", "Kind": "METHOD"},
    {"UnitType": "GoPackage", "Path": "main", "Name": "main", "Kind": "func"}
  ],
  "Refs": []
}"#;

fn objcdef(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_objcdef"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("OBJCDEF_QUAL")
        .env_remove("OBJCDEF_UNIT_TYPE")
        .env_remove("OBJCDEF_NO_COLOR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_graph(dir: &Path) -> String {
    let path = dir.join("graph.json");
    std::fs::write(&path, GRAPH_JSON).expect("write graph fixture");
    path.to_string_lossy().into_owned()
}

fn write_config(dir: &Path, contents: &str) {
    let config_dir = dir.join("objcdef");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), contents).unwrap();
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_renders_graph_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = objcdef(dir.path())
        .arg(&graph)
        .output()
        .expect("run objcdef");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "class AppDelegate class",
            "window",
            "enum Direction enum",
            "method viewDidLoad",
        ]
    );
}

#[test]
fn test_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();

    let mut child = objcdef(dir.path())
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn objcdef");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"Name": "Shape", "Kind": "CLASS"}]"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["class Shape class"]);
}

#[test]
fn test_kind_filter() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = objcdef(dir.path())
        .args(["-k", "ENUM,METHOD", graph.as_str()])
        .output()
        .unwrap();

    assert_eq!(
        stdout_lines(&output),
        vec!["enum Direction enum", "method viewDidLoad"]
    );
}

#[test]
fn test_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = objcdef(dir.path())
        .args(["--json", "--qual", "lang", graph.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 4);

    let method = &items[3];
    assert_eq!(method["language"], "Objective-C");
    assert_eq!(method["keyword"], "method");
    assert_eq!(method["kind"], "METHOD");
    assert_eq!(method["name"], "viewDidLoad");
    assert_eq!(method["type"], "");
    assert_eq!(method["separator"], " ");
    assert_eq!(method["path"], "AppDelegate/viewDidLoad");

    // Unit type filled in from the default
    assert_eq!(items[2]["unit_type"], "ObjectiveC");
}

#[test]
fn test_unknown_default_unit_type_skips_untyped_defs() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = objcdef(dir.path())
        .args(["--unit-type", "Swift", graph.as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(!lines.iter().any(|l| l == "enum Direction enum"));
}

#[test]
fn test_config_file_unit_type() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    write_config(dir.path(), "unit_type = \"Swift\"\n");

    let output = objcdef(dir.path()).arg(&graph).output().unwrap();
    assert_eq!(stdout_lines(&output).len(), 3);

    // CLI flag beats the config file
    let output = objcdef(dir.path())
        .args(["-u", "ObjectiveC", graph.as_str()])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output).len(), 4);
}

#[test]
fn test_invalid_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{\"Defs\": [").unwrap();

    let output = objcdef(dir.path()).arg(&path).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid graph JSON"), "stderr: {}", stderr);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = objcdef(dir.path())
        .arg(dir.path().join("nope.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot read"));
}

#[test]
fn test_list_formatters() {
    let dir = tempfile::tempdir().unwrap();
    let output = objcdef(dir.path())
        .arg("--list-formatters")
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output), vec!["ObjectiveC"]);
}

#[test]
fn test_bad_qualification_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = objcdef(dir.path())
        .args(["--qual", "global"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_env_unit_type_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    write_config(dir.path(), "unit_type = \"Swift\"\n");

    let output = objcdef(dir.path())
        .env("OBJCDEF_UNIT_TYPE", "ObjectiveC")
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output).len(), 4);

    // CLI flag beats the environment
    let output = objcdef(dir.path())
        .env("OBJCDEF_UNIT_TYPE", "ObjectiveC")
        .args(["-u", "Swift", graph.as_str()])
        .output()
        .unwrap();
    assert_eq!(stdout_lines(&output).len(), 3);
}

#[test]
fn test_env_qualification() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    write_config(dir.path(), "qualification = \"dep\"\n");

    let output = objcdef(dir.path())
        .env("OBJCDEF_QUAL", "repo")
        .args(["-v", graph.as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(
        err.contains("qualification = repo (from env/config/default)"),
        "stderr: {}",
        err
    );

    let output = objcdef(dir.path())
        .env("OBJCDEF_QUAL", "repo")
        .args(["-v", "--qual", "scope", graph.as_str()])
        .output()
        .unwrap();
    let err = stderr(&output);
    assert!(
        err.contains("qualification = scope (from CLI)"),
        "stderr: {}",
        err
    );
}

#[test]
fn test_malformed_config_warns() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());
    write_config(dir.path(), "unit_type = [broken\n");

    let output = objcdef(dir.path()).arg(&graph).output().unwrap();

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("Warning: Failed to parse"), "stderr: {}", err);
    assert!(err.contains("config.toml"), "stderr: {}", err);
    // Falls back to defaults
    assert_eq!(stdout_lines(&output).len(), 4);
}

#[test]
fn test_bad_env_qualification_warns() {
    let dir = tempfile::tempdir().unwrap();
    let graph = write_graph(dir.path());

    let output = objcdef(dir.path())
        .env("OBJCDEF_QUAL", "everything")
        .arg(&graph)
        .output()
        .unwrap();

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(
        err.contains("Warning: Ignoring qualification from OBJCDEF_QUAL"),
        "stderr: {}",
        err
    );
    assert_eq!(stdout_lines(&output).len(), 4);
}

#[test]
fn test_config_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = objcdef(dir.path()).arg("--config-path").output().unwrap();

    assert!(output.status.success());
    let expected = dir.path().join("objcdef").join("config.toml");
    assert_eq!(stdout_lines(&output), vec![expected.display().to_string()]);
}

#[test]
fn test_config_init() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("objcdef").join("config.toml");

    let output = objcdef(dir.path()).arg("--config-init").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created config file"), "stdout: {}", stdout);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("unit_type = \"ObjectiveC\""));

    // Refuses to overwrite
    let output = objcdef(dir.path()).arg("--config-init").output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("already exists"));
}
