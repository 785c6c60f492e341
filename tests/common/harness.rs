//! Conformance harness utilities.
//!
//! Failing cases can be captured as expected/actual JSON artifacts.
//!
//! # Environment Variables
//!
//! - `HARNESS_ARTIFACTS=1` - Enable artifact logging
//! - `HARNESS_ARTIFACTS_DIR` - Custom artifact directory (default: `target/test-artifacts`)

#![allow(dead_code)]

use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct ArtifactConfig {
    pub enabled: bool,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("HARNESS_ARTIFACTS").is_ok_and(|v| v == "1"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArtifactLogger {
    suite: String,
    test: String,
    pub artifact_dir: PathBuf,
    pub config: ArtifactConfig,
    started_at: Instant,
}

impl ArtifactLogger {
    pub fn new(suite: &str, test: &str) -> Self {
        let base_dir = std::env::var("HARNESS_ARTIFACTS_DIR")
            .unwrap_or_else(|_| "target/test-artifacts".to_string());
        let artifact_dir = PathBuf::from(base_dir).join(suite).join(test);
        let config = ArtifactConfig::default();
        if config.enabled {
            fs::create_dir_all(&artifact_dir).ok();
        }
        Self {
            suite: suite.to_string(),
            test: test.to_string(),
            artifact_dir,
            config,
            started_at: Instant::now(),
        }
    }

    pub fn log_case<S: Serialize>(&self, name: &str, expected: &S, actual: &S) {
        if !self.config.enabled {
            return;
        }
        let expected_path = self.artifact_dir.join(format!("{name}.expected.json"));
        let actual_path = self.artifact_dir.join(format!("{name}.actual.json"));
        if let Ok(json) = serde_json::to_string_pretty(expected) {
            fs::write(expected_path, json).ok();
        }
        if let Ok(json) = serde_json::to_string_pretty(actual) {
            fs::write(actual_path, json).ok();
        }
    }

    pub fn write_summary(&self, passed: bool, cases: &[CaseResult]) {
        if !self.config.enabled {
            return;
        }
        let failed = cases.iter().filter(|c| c.result == "fail").count();
        let summary = Summary {
            suite: self.suite.clone(),
            test: self.test.clone(),
            passed,
            failed,
            total: cases.len(),
            duration_ms: self.started_at.elapsed().as_millis(),
            cases: cases.to_vec(),
        };
        if let Ok(json) = serde_json::to_string_pretty(&summary) {
            fs::write(self.artifact_dir.join("summary.json"), json).ok();
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub result: String,
    pub duration_ms: u128,
}

#[derive(Clone, Debug, Serialize)]
struct Summary {
    suite: String,
    test: String,
    passed: bool,
    failed: usize,
    total: usize,
    duration_ms: u128,
    cases: Vec<CaseResult>,
}

pub fn case_timer() -> Instant {
    Instant::now()
}

pub fn case_result(name: &str, passed: bool, start: Instant) -> CaseResult {
    CaseResult {
        name: name.to_string(),
        result: if passed { "pass" } else { "fail" }.to_string(),
        duration_ms: start.elapsed().as_millis(),
    }
}
