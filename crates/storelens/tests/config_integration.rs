//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
    assert_eq!(json["config"]["match_strategy"], "substring");
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".storelens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".storelens.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("storelens.toml"), r#"log_level = "warn""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".storelens.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["log_level"], "debug");
}

#[test]
fn yaml_config_parses() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("storelens.yaml"),
        "log_level: error\nmatch_strategy: token\n",
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "error");
    assert_eq!(json["config"]["match_strategy"], "token");
}

#[test]
fn explicit_config_flag_overrides_discovery() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".storelens.toml"), r#"log_level = "debug""#).unwrap();
    let explicit = tmp.path().join("explicit.toml");
    fs::write(&explicit, r#"log_level = "error""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["log_level"], "error");
}

#[test]
fn env_var_overrides_file_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".storelens.toml"), r#"log_level = "debug""#).unwrap();

    let output = cmd()
        .env("STORELENS_LOG_LEVEL", "warn")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Config-driven analysis behavior
// =============================================================================

#[test]
fn configured_stopwords_reach_keyword_analysis() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".storelens.toml"),
        r#"stopwords = ["배송"]"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join("reviews.csv"),
        "리뷰내용\n배송이 빨라요\n배송 상태 만족\n",
    )
    .unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "keywords",
            "reviews.csv",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let keywords: Vec<&str> = json["counts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["keyword"].as_str().unwrap())
        .collect();
    assert!(
        !keywords.contains(&"배송"),
        "configured stopword leaked into keywords: {keywords:?}"
    );
}

#[test]
fn configured_catalog_reaches_category_analysis() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("catalog.json"),
        r#"{
  "version": 2,
  "positive": [{"name": "맞춤", "keywords": ["좋아요"]}],
  "neutral": [],
  "negative": []
}"#,
    )
    .unwrap();
    fs::write(
        tmp.path().join(".storelens.toml"),
        r#"catalog = "catalog.json""#,
    )
    .unwrap();
    fs::write(tmp.path().join("reviews.csv"), "리뷰내용\n정말 좋아요\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "categories",
            "reviews.csv",
            "--sentiment",
            "positive",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["category"], "맞춤");
}
