//! Integration tests for the process pipeline.

use std::fs;
use std::path::Path;

use roster_cli::cli::ProcessArgs;
use roster_cli::commands::run_process;
use roster_cli::pipeline::{self, OutputConfig};
use roster_model::Rejection;
use roster_validate::RejectionReporter;
use serde_json::{Value, json};

const SAMPLE_INPUT: &str = r#"[
    {"id": 1, "name": "A", "email": "a@example.com", "status": "active", "tags": ["t1"]},
    {"id": 2, "name": "B", "email": "bad", "status": "active", "tags": []}
]"#;

#[derive(Default)]
struct RecordingReporter {
    calls: usize,
    messages: Vec<String>,
}

impl RejectionReporter for RecordingReporter {
    fn report(&mut self, rejections: &[Rejection]) {
        self.calls += 1;
        self.messages = rejections.iter().map(Rejection::message).collect();
    }
}

fn write_sample_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("input.json");
    fs::write(&input, SAMPLE_INPUT).expect("write input");
    input
}

#[test]
fn stages_compose_end_to_end() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_sample_input(dir.path());
    let output = dir.path().join("out").join("result.json");

    let candidates = pipeline::ingest(&input).expect("ingest");
    assert_eq!(candidates.len(), 2);

    let mut reporter = RecordingReporter::default();
    let outcome = pipeline::validate(candidates, &mut reporter);
    assert_eq!(reporter.calls, 1);
    assert_eq!(
        reporter.messages,
        ["Value for 'email' has an incorrect format"]
    );

    let users = pipeline::transform(&outcome.valid);
    let paths = pipeline::output(
        &users,
        &outcome.rejections,
        &OutputConfig {
            output: &output,
            rejection_report: true,
        },
    )
    .expect("output");

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&paths.users).expect("read output"))
            .expect("parse output");
    assert_eq!(
        written,
        json!([
            {"id": 1, "name": "A", "email": "a@example.com", "status": "active", "tags": ["t1"]}
        ])
    );

    let report_path = paths.rejection_report.expect("rejection report written");
    let report: Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["rejected"], json!(1));
    assert_eq!(report["rejections"][0]["record"]["id"], json!(2));
}

#[test]
fn run_process_writes_output_and_counts() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_sample_input(dir.path());
    let output = dir.path().join("result.json");

    let result = run_process(&ProcessArgs {
        input: input.clone(),
        output: Some(output.clone()),
        rejection_report: true,
        dry_run: false,
    })
    .expect("process");

    assert_eq!(result.total, 2);
    assert_eq!(result.valid, 1);
    assert_eq!(result.rejections.len(), 1);
    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    assert!(output.exists());
    assert!(dir.path().join("rejections.json").exists());
}

#[test]
fn run_process_defaults_the_output_next_to_the_input() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_sample_input(dir.path());

    let result = run_process(&ProcessArgs {
        input,
        output: None,
        rejection_report: false,
        dry_run: false,
    })
    .expect("process");

    assert_eq!(
        result.output.as_deref(),
        Some(dir.path().join("result.json").as_path())
    );
    assert!(dir.path().join("result.json").exists());
    assert!(result.rejection_report.is_none());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = write_sample_input(dir.path());

    let result = run_process(&ProcessArgs {
        input,
        output: Some(dir.path().join("result.json")),
        rejection_report: true,
        dry_run: true,
    })
    .expect("process");

    assert!(result.output.is_none());
    assert!(result.rejection_report.is_none());
    assert_eq!(result.valid, 1);
    assert!(!dir.path().join("result.json").exists());
    assert!(!dir.path().join("rejections.json").exists());
}

#[test]
fn missing_input_is_a_fatal_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let result = run_process(&ProcessArgs {
        input: dir.path().join("absent.json"),
        output: None,
        rejection_report: false,
        dry_run: false,
    });
    assert!(result.is_err());
}
