//! Typed run results consumed by the summary printer.

use std::path::PathBuf;

use roster_model::Rejection;

/// Result of one `process` run.
#[derive(Debug)]
pub struct ProcessResult {
    pub input: PathBuf,
    /// Written output file, `None` on a dry run.
    pub output: Option<PathBuf>,
    /// Written rejection report, when requested and not a dry run.
    pub rejection_report: Option<PathBuf>,
    /// Candidates in the input batch.
    pub total: usize,
    /// Candidates that passed every rule.
    pub valid: usize,
    pub rejections: Vec<Rejection>,
    pub dry_run: bool,
}
