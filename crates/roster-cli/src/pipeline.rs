//! Roster processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read and decode the input JSON file
//! 2. **Validate**: classify candidates, collect rejections
//! 3. **Transform**: project survivors to the canonical shape
//! 4. **Output**: write normalized users and the optional rejection report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_model::{CandidateRecord, CanonicalUser, Rejection};
use roster_validate::{RejectionReporter, ValidationOutcome, validate_batch};

/// Configuration for the output stage.
#[derive(Debug)]
pub struct OutputConfig<'a> {
    /// Destination for the normalized users.
    pub output: &'a Path,
    /// Also write `rejections.json` next to the output.
    pub rejection_report: bool,
}

/// Paths written by the output stage.
#[derive(Debug)]
pub struct OutputPaths {
    pub users: PathBuf,
    pub rejection_report: Option<PathBuf>,
}

/// Stage 1: read and decode the input file.
pub fn ingest(input: &Path) -> Result<Vec<CandidateRecord>> {
    let span = info_span!("ingest", input = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    let candidates = roster_ingest::read_candidates(input)
        .with_context(|| format!("read candidates from {}", input.display()))?;
    info!(
        count = candidates.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "ingest complete"
    );
    Ok(candidates)
}

/// Stage 2: classify the batch; `reporter` receives the completed
/// rejection list exactly once.
pub fn validate(
    candidates: Vec<CandidateRecord>,
    reporter: &mut dyn RejectionReporter,
) -> ValidationOutcome {
    let span = info_span!("validate");
    let _guard = span.enter();
    let start = Instant::now();
    let outcome = validate_batch(candidates, reporter);
    info!(
        valid = outcome.valid.len(),
        rejected = outcome.rejections.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "validate complete"
    );
    outcome
}

/// Stage 3: project validated records into canonical users.
pub fn transform(valid: &[CandidateRecord]) -> Vec<CanonicalUser> {
    let span = info_span!("transform");
    let _guard = span.enter();
    let users = roster_transform::transform_batch(valid);
    info!(count = users.len(), "transform complete");
    users
}

/// Stage 4: write the normalized users and, when configured, the
/// rejection report beside them.
pub fn output(
    users: &[CanonicalUser],
    rejections: &[Rejection],
    config: &OutputConfig<'_>,
) -> Result<OutputPaths> {
    let span = info_span!("output", output = %config.output.display());
    let _guard = span.enter();
    let start = Instant::now();

    roster_report::write_users_json(config.output, users)
        .with_context(|| format!("write users to {}", config.output.display()))?;

    let rejection_report = if config.rejection_report {
        let report_dir = match config.output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let path = roster_report::write_rejection_report_json(report_dir, rejections)
            .context("write rejection report")?;
        Some(path)
    } else {
        None
    };

    info!(
        users = users.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "output complete"
    );
    Ok(OutputPaths {
        users: config.output.to_path_buf(),
        rejection_report,
    })
}
