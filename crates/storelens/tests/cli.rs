//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Write a file into a temp dir and return the dir.
fn fixture(name: &str, content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(name), content).unwrap();
    tmp
}

fn run_json(tmp: &TempDir, args: &[&str]) -> Value {
    let mut full = vec!["-C", tmp.path().to_str().unwrap()];
    full.extend_from_slice(args);
    full.push("--json");
    let output = cmd().args(&full).output().expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_args_shows_help() {
    cmd().assert().failure().stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("storelens"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Keywords Command
// =============================================================================

#[test]
fn keywords_ranks_frequent_nouns() {
    let tmp = fixture(
        "reviews.csv",
        "리뷰내용\n배송이 빨라요\n배송 상태가 만족\n배송 최고\n",
    );
    let json = run_json(&tmp, &["keywords", "reviews.csv"]);
    let top = json["top"].as_array().unwrap();
    assert_eq!(top[0]["keyword"], "배송");
    assert_eq!(top[0]["count"], 3);
}

#[test]
fn keywords_rejects_non_review_file() {
    let tmp = fixture("sales.csv", "상품명,1년 매출\n쿠키,100\n");
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "keywords", "sales.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("review text column"));
}

// =============================================================================
// Sentiment Command
// =============================================================================

#[test]
fn sentiment_splits_three_ways() {
    let tmp = fixture(
        "reviews.csv",
        "리뷰내용\n배송이 빨라요 좋아요\n맛없어요 별로예요\n그냥 보통이에요\n",
    );
    let json = run_json(&tmp, &["sentiment", "reviews.csv"]);
    let counts = json["counts"].as_array().unwrap();
    let count_of = |label: &str| {
        counts
            .iter()
            .find(|c| c["sentiment"] == label)
            .and_then(|c| c["reviews"].as_u64())
    };
    assert_eq!(count_of("positive"), Some(1));
    assert_eq!(count_of("negative"), Some(1));
    assert_eq!(count_of("neutral"), Some(1));
}

#[test]
fn sentiment_scores_stay_bounded() {
    let tmp = fixture(
        "reviews.csv",
        "리뷰내용\n최고 만족 추천\n최악 실망\n\n",
    );
    let json = run_json(&tmp, &["sentiment", "reviews.csv"]);
    for review in json["reviews"].as_array().unwrap() {
        let score = review["sentiment_score"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&score));
    }
}

// =============================================================================
// Categories Command
// =============================================================================

#[test]
fn categories_reports_positive_bucket() {
    let tmp = fixture(
        "reviews.csv",
        "리뷰내용\n배송이 빨라요 좋아요\n포장 좋아요 만족\n",
    );
    let json = run_json(&tmp, &["categories", "reviews.csv", "--sentiment", "positive"]);
    assert_eq!(json["sentiment"], "positive");
    assert_eq!(json["total_reviews"], 2);
    assert!(!json["rows"].as_array().unwrap().is_empty());
}

#[test]
fn categories_empty_bucket_is_not_an_error() {
    let tmp = fixture("reviews.csv", "리뷰내용\n좋아요\n");
    let json = run_json(&tmp, &["categories", "reviews.csv", "--sentiment", "negative"]);
    assert_eq!(json["total_reviews"], 0);
    assert_eq!(json["rows"].as_array().unwrap().len(), 0);
}

// =============================================================================
// Options Command
// =============================================================================

#[test]
fn options_ranks_by_count() {
    let tmp = fixture(
        "options.csv",
        "옵션정보,판매량\n소용량,10\n대용량,50\n중용량,30\n",
    );
    let json = run_json(&tmp, &["options", "options.csv"]);
    let rows = json["options"].as_array().unwrap();
    assert_eq!(rows[0]["label"], "대용량");
    assert_eq!(rows[0]["rank"], 1);
    assert_eq!(rows.len(), 3);
}

#[test]
fn options_caps_at_top_n() {
    let mut content = String::from("옵션정보,판매량\n");
    for i in 0..15 {
        content.push_str(&format!("옵션{i},{}\n", 100 - i));
    }
    let tmp = fixture("options.csv", &content);
    let json = run_json(&tmp, &["options", "options.csv"]);
    assert_eq!(json["options"].as_array().unwrap().len(), 10);
}

// =============================================================================
// Sales Command
// =============================================================================

fn sales_csv() -> String {
    let mut content =
        String::from("상품명,1년 매출,기본판매가격,리뷰점수,리뷰수\n");
    for i in 1..=6 {
        content.push_str(&format!(
            "상품{i},{},{},{},{}\n",
            i * 10_000,
            i * 1_000,
            3.5 + 0.2 * i as f64,
            i * 10
        ));
    }
    content.push_str("전체 합계,210000,,,\n");
    content
}

#[test]
fn sales_excludes_total_rows_everywhere() {
    let tmp = fixture("sales.csv", &sales_csv());
    let json = run_json(&tmp, &["sales", "sales.csv"]);
    let dumped = json.to_string();
    assert!(
        !dumped.contains("합계"),
        "total row leaked into output: {dumped}"
    );
    assert_eq!(json["summary"]["count"], 6);
    assert_eq!(json["period"], "1-year");
}

#[test]
fn sales_ranks_and_segments() {
    let tmp = fixture("sales.csv", &sales_csv());
    let json = run_json(&tmp, &["sales", "sales.csv", "--top", "3"]);
    let top = json["top_products"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0]["product_name"], "상품6");
    assert_eq!(json["price_segments"].as_array().unwrap().len(), 4);
    assert!(json["correlation"]["coefficient"].as_f64().is_some());
}

#[test]
fn sales_unknown_period_fails_with_available_list() {
    let tmp = fixture("sales.csv", &sales_csv());
    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "sales",
            "sales.csv",
            "--period",
            "7-day",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("available: 1-year"));
}

#[test]
fn sales_requires_revenue_columns() {
    let tmp = fixture("sales.csv", "상품명,기본판매가격\n쿠키,1000\n");
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "sales", "sales.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("revenue columns"));
}
