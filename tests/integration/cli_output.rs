//! End-to-end tests of the treehash binary

use super::test_utils::{sample_tree, sample_tree_digest};
use std::process::Command;
use tempfile::TempDir;

fn treehash() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_treehash"));
    // Keep user configuration and log settings out of the test
    let isolated = std::env::temp_dir().join("treehash-cli-tests-config");
    cmd.env("XDG_CONFIG_HOME", isolated)
        .env_remove("TREEHASH_LOG")
        .env_remove("TREEHASH_LOG_FORMAT")
        .env_remove("TREEHASH_LOG_OUTPUT")
        .env_remove("TREEHASH__HASHING__MAX_OPEN_FILES");
    cmd
}

#[test]
fn test_prints_both_modes() {
    let (_temp_dir, root) = sample_tree();
    let output = treehash().arg(&root).output().unwrap();

    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let hex = treehash::digest_to_hex(&sample_tree_digest());
    assert_eq!(stdout.matches(&hex).count(), 2);
    assert!(stdout.contains("sequential"));
    assert!(stdout.contains("concurrent"));
    assert!(!stdout.contains("WARNING"));
}

#[test]
fn test_json_output() {
    let (_temp_dir, root) = sample_tree();
    let output = treehash()
        .arg(&root)
        .args(["--format", "json", "--max-open-files", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hex = treehash::digest_to_hex(&sample_tree_digest());
    assert_eq!(json["matches"], true);
    assert_eq!(json["reports"][0]["digest"], hex.as_str());
    assert_eq!(json["reports"][1]["digest"], hex.as_str());
    assert!(json["reports"][0]["elapsed_ms"].is_number());
}

#[test]
fn test_no_argument_prints_usage() {
    let output = treehash().output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: treehash"));
}

#[test]
fn test_missing_path_prints_usage() {
    let temp_dir = TempDir::new().unwrap();
    let output = treehash()
        .arg(temp_dir.path().join("does-not-exist"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Directory not found"));
    assert!(stdout.contains("Usage: treehash"));
}

#[test]
fn test_file_argument_fails() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    std::fs::write(&file, "content").unwrap();

    let output = treehash().arg(&file).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Path not found"));
}

#[test]
fn test_verbose_logs_to_file() {
    let (temp_dir, root) = sample_tree();
    let log_file = temp_dir.path().join("logs").join("treehash.log");

    let output = treehash()
        .arg(&root)
        .args(["--mode", "sequential", "--verbose", "--log-output", "file"])
        .arg("--log-file")
        .arg(&log_file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let logs = std::fs::read_to_string(&log_file).unwrap();
    assert!(logs.contains("Tree hash completed"));
}

#[test]
fn test_invalid_config_file_fails() {
    let (temp_dir, root) = sample_tree();
    let config_file = temp_dir.path().join("bad.toml");
    std::fs::write(&config_file, "[logging]\nlevel = \"loud\"\n").unwrap();

    let output = treehash()
        .arg(&root)
        .arg("--config")
        .arg(&config_file)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration validation failed"), "{}", stderr);
    assert!(stderr.contains("Invalid log level: loud"), "{}", stderr);
    assert!(output.stdout.is_empty());
}
