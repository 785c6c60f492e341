//! Conformance tests based on fixture files.
//!
//! Expected outputs were captured from the reference `wcwidth`/`wcswidth`
//! behaviour over the same range tables; these tests replay every case.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::uninlined_format_args
)]

use serde::Deserialize;
use serde_json::Value;

mod common;

use cellwidth::{match_version, wcswidth_str, wcwidth};
use common::harness::{ArtifactLogger, CaseResult, case_result, case_timer};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FixtureSet {
    #[serde(rename = "crate")]
    crate_name: String,
    #[serde(default)]
    version: String,
    captured_at: String,
    tests: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FixtureCase {
    name: String,
    category: String,
    input: Value,
    expected_output: Value,
}

fn load_fixtures() -> FixtureSet {
    let data = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/conformance/fixtures/wcwidth.json"
    ))
    .expect("read conformance fixture");
    serde_json::from_str(&data).expect("parse fixture")
}

#[test]
fn conformance_fixtures() {
    common::setup_test_logging();
    let fixtures = load_fixtures();
    assert_eq!(fixtures.crate_name, "cellwidth");
    let logger = ArtifactLogger::new("conformance", "fixtures");
    let mut results: Vec<CaseResult> = Vec::new();
    let mut all_passed = true;
    let mut passed_count = 0;
    let mut failed_count = 0;

    for case in &fixtures.tests {
        let start = case_timer();
        let result = run_case(case, &logger);
        results.push(case_result(&case.name, result, start));
        if result {
            passed_count += 1;
        } else {
            eprintln!("FAILED: {} (category: {})", case.name, case.category);
            eprintln!("  Input: {:?}", case.input);
            eprintln!("  Expected: {:?}", case.expected_output);
            failed_count += 1;
            all_passed = false;
        }
    }

    logger.write_summary(all_passed, &results);
    eprintln!(
        "Conformance: {} passed, {} failed, {} total",
        passed_count,
        failed_count,
        fixtures.tests.len()
    );
    assert!(all_passed, "conformance fixtures failed");
}

#[test]
fn fixtures_cover_every_category() {
    let fixtures = load_fixtures();
    for category in ["resolve", "wcwidth", "wcswidth"] {
        assert!(
            fixtures.tests.iter().any(|c| c.category == category),
            "no fixtures for {category}"
        );
    }
}

fn run_case(case: &FixtureCase, logger: &ArtifactLogger) -> bool {
    match case.category.as_str() {
        "resolve" => run_resolve_case(case, logger),
        "wcwidth" => run_wcwidth_case(case, logger),
        "wcswidth" => run_wcswidth_case(case, logger),
        _ => {
            eprintln!("Unknown category: {}", case.category);
            true // Skip unknown categories
        }
    }
}

fn check(case: &FixtureCase, logger: &ArtifactLogger, actual: Value) -> bool {
    let passed = actual == case.expected_output;
    if !passed {
        eprintln!("  Actual: {actual:?}");
        logger.log_case(&case.name, &case.expected_output, &actual);
    }
    passed
}

fn input_str<'a>(case: &'a FixtureCase, key: &str) -> &'a str {
    case.input.get(key).and_then(Value::as_str).unwrap_or("")
}

fn run_resolve_case(case: &FixtureCase, logger: &ArtifactLogger) -> bool {
    let selector = input_str(case, "selector");
    let resolved = match_version(selector).version;
    check(case, logger, serde_json::json!({ "version": resolved.to_string() }))
}

fn run_wcwidth_case(case: &FixtureCase, logger: &ArtifactLogger) -> bool {
    let codepoint = case
        .input
        .get("codepoint")
        .and_then(Value::as_u64)
        .expect("codepoint") as u32;
    let version = input_str(case, "version");
    let width = wcwidth(codepoint, version);
    check(case, logger, serde_json::json!({ "width": width }))
}

fn run_wcswidth_case(case: &FixtureCase, logger: &ArtifactLogger) -> bool {
    let text = input_str(case, "text");
    let n = case
        .input
        .get("n")
        .and_then(Value::as_u64)
        .map(|n| n as usize);
    let version = input_str(case, "version");
    let width = wcswidth_str(text, n, version);
    check(case, logger, serde_json::json!({ "width": width }))
}
