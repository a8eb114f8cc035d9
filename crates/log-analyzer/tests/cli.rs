//! End-to-end tests that run the compiled `log-analyzer` binary.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn run(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_log-analyzer"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn log-analyzer")
}

fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

fn write_gz_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut encoder = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::fast());
    for line in lines {
        writeln!(encoder, "{}", line).unwrap();
    }
    encoder.finish().unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── Usage ─────────────────────────────────────────────────────────────────────

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let output = run(&[]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"), "stderr: {}", stderr(&output));
}

// ── Reports ───────────────────────────────────────────────────────────────────

#[test]
fn test_report_for_mixed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_log(
        dir.path(),
        "app.log",
        &[
            "2024-01-01 ERROR disk full",
            "2024-01-01 INFO ok",
            "2024-01-01 ERROR disk full",
            "bad line",
        ],
    );

    let output = run(&[path.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
Total log entries: 3

Log level distribution:
ERROR: 2
INFO: 1

Top 3 most frequent log messages:
1. disk full: 2
2. ok: 1
"
    );

    let err = stderr(&output);
    assert_eq!(err.matches("Unable to read log entry").count(), 1, "stderr: {err}");
    assert!(err.contains("[bad line]"));
}

#[test]
fn test_nonexistent_file_warns_and_reports_zero() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.log");

    let output = run(&[missing.as_os_str()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "\
Total log entries: 0

Log level distribution:

Top 3 most frequent log messages:
"
    );
    assert!(stderr(&output).contains("missing.log"));
}

#[test]
fn test_plain_and_gzip_files_are_combined() {
    let dir = TempDir::new().unwrap();
    let plain = write_log(dir.path(), "a.log", &["t WARN slow", "t INFO ok"]);
    let gz = write_gz_log(dir.path(), "b.log.gz", &["t WARN slow", "t WARN slow"]);

    let output = run(&[plain.as_os_str(), gz.as_os_str()]);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.starts_with("Total log entries: 4\n"));
    assert!(out.contains("WARN: 3\n"));
    assert!(out.contains("1. slow: 3\n"));
    assert!(out.contains("2. ok: 1\n"));
}

#[test]
fn test_top_option_limits_ranking() {
    let dir = TempDir::new().unwrap();
    let path = write_log(dir.path(), "app.log", &["t I a", "t I a", "t I b", "t I c"]);

    let output = run(&[OsStr::new("--top"), OsStr::new("1"), path.as_os_str()]);
    let out = stdout(&output);

    assert!(out.contains("Top 1 most frequent log messages:\n1. a: 2\n"));
    assert!(!out.contains("2. "));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_log(dir.path(), "app.log", &["t ERROR boom", "t ERROR boom"]);

    let output = run(&[OsStr::new("--format"), OsStr::new("json"), path.as_os_str()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total_entries"], 2);
    assert_eq!(value["top_messages"][0]["message"], "boom");
    assert_eq!(value["metadata"]["files_processed"], 1);
}

#[test]
fn test_json_output_lists_failed_files() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.log");
    let good = write_log(dir.path(), "good.log", &["t INFO ok"]);

    let output = run(&[
        OsStr::new("--format"),
        OsStr::new("json"),
        missing.as_os_str(),
        good.as_os_str(),
    ]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["total_entries"], 1);
    assert_eq!(value["metadata"]["files_failed"], 1);
    let failed = value["metadata"]["failed_files"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["path"], missing.to_str().unwrap());
    assert!(failed[0]["error"].as_str().unwrap().starts_with("Unable to open file"));
}

#[test]
fn test_carriage_return_terminated_lines_count_as_one_message() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app.log");
    std::fs::write(&path, "t INFO ok\r\nt INFO ok\r").unwrap();

    let output = run(&[path.as_os_str()]);
    let out = stdout(&output);

    assert!(out.starts_with("Total log entries: 2\n"));
    assert!(out.contains("1. ok: 2\n"));
    assert!(!out.contains("2. "));
}

// ── Help ──────────────────────────────────────────────────────────────────────

#[test]
fn test_help_documents_directory_inputs() {
    let output = run(&[OsStr::new("--help")]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("directories are walked recursively"), "help: {}", out);
}
