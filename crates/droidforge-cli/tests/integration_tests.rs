//! Integration tests for the `droidforge` binary.
//!
//! Provider credentials are stripped from the environment in every test, so
//! generation always takes the deterministic fallback path - no network.

use std::io::{Cursor, Read};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn droidforge() -> Command {
    let mut cmd = Command::cargo_bin("droidforge").unwrap();
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    droidforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Android"))
        .stdout(predicate::str::contains("gen"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    droidforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn gen_help_lists_flags() {
    droidforge()
        .args(["gen", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--app-name"))
        .stdout(predicate::str::contains("--package-name"))
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--provider"));
}

#[test]
fn gen_writes_a_valid_zip() {
    let dir = TempDir::new().unwrap();

    droidforge()
        .current_dir(dir.path())
        .args([
            "gen",
            "-n",
            "DemoApp",
            "-p",
            "com.example.demo",
            "--prompt",
            "Simple screen with a title and a button",
            "--provider",
            "fallback",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("DemoApp.zip"));

    let bytes = std::fs::read(dir.path().join("DemoApp.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 14);

    let mut activity = String::new();
    archive
        .by_name("app/src/main/java/com/example/demo/MainActivity.kt")
        .unwrap()
        .read_to_string(&mut activity)
        .unwrap();
    assert!(activity.contains("Text(\"Simple screen with a title and a button\""));
}

#[test]
fn gen_honors_output_path() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("custom-name.zip");

    droidforge()
        .current_dir(dir.path())
        .args([
            "gen",
            "-n",
            "App",
            "-p",
            "com.example.app",
            "--prompt",
            "a screen",
            "--provider",
            "fallback",
            "-o",
        ])
        .arg(&out)
        .assert()
        .success();

    assert!(out.is_file());
}

#[test]
fn gen_rejects_invalid_package_name() {
    let dir = TempDir::new().unwrap();

    droidforge()
        .current_dir(dir.path())
        .args([
            "gen",
            "-n",
            "App",
            "-p",
            "com..broken",
            "--prompt",
            "a screen",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("package name"));

    assert!(!dir.path().join("App.zip").exists());
}

#[test]
fn gen_missing_templates_dir_is_configuration_error() {
    let dir = TempDir::new().unwrap();

    droidforge()
        .current_dir(dir.path())
        .args([
            "gen",
            "-n",
            "App",
            "-p",
            "com.example.app",
            "--prompt",
            "a screen",
            "--templates-dir",
            "/definitely/not/here",
        ])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn gen_quiet_produces_no_stdout() {
    let dir = TempDir::new().unwrap();

    droidforge()
        .current_dir(dir.path())
        .args([
            "-q",
            "gen",
            "-n",
            "App",
            "-p",
            "com.example.app",
            "--prompt",
            "a screen",
            "--provider",
            "fallback",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("App.zip").is_file());
}

#[test]
fn templates_lists_the_mapping() {
    droidforge()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("14 files"))
        .stdout(predicate::str::contains("settings.gradle.kts"))
        .stdout(predicate::str::contains("MainActivity.kt"));
}

#[test]
fn shell_completions() {
    droidforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("droidforge"));
}
