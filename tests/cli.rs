//! End-to-end runs of the `blogcfg` binary.

use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary in an empty directory, pointing `-C` at a file that does not exist.
fn run_without_config(args: &[&str]) -> Output {
    let temp = TempDir::new().unwrap();
    Command::new(env!("CARGO_BIN_EXE_blogcfg"))
        .current_dir(temp.path())
        .args(["--color", "never", "-C", "blogcfg-absent-config.toml"])
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_show_json_stdout_is_pure_json() {
    let output = run_without_config(&["show", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["title"], "johann");
    assert_eq!(value["site_url"], "https://johannkerr.com");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_get_prints_only_the_value() {
    let output = run_without_config(&["get", "siteUrl"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "https://johannkerr.com\n");
}
