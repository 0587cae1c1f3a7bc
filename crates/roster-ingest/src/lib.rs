//! Input collaborator: reads candidate records from a JSON source.
//!
//! The pipeline core consumes already-decoded records; this crate owns the
//! file boundary. Malformed files are fatal boundary errors, never
//! per-candidate rejections.

use std::fs;
use std::path::Path;

use roster_model::{CandidateRecord, Result};
use tracing::debug;

/// Decode a top-level JSON array of candidate objects.
pub fn parse_candidates(raw: &str) -> Result<Vec<CandidateRecord>> {
    let candidates = serde_json::from_str(raw)?;
    Ok(candidates)
}

/// Read `path` and decode its candidate records.
pub fn read_candidates(path: &Path) -> Result<Vec<CandidateRecord>> {
    let raw = fs::read_to_string(path)?;
    let candidates = parse_candidates(&raw)?;
    debug!(count = candidates.len(), path = %path.display(), "candidates decoded");
    Ok(candidates)
}
