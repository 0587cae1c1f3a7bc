//! Machine-readable rejection report.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use roster_model::{Rejection, Result};
use serde::Serialize;
use serde_json::Value;

/// Schema identifier embedded in every report document.
pub const REPORT_SCHEMA: &str = "roster-rejection-report";

/// Bumped when the report layout changes.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct RejectionReportPayload {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    rejected: usize,
    rejections: Vec<RejectionJson>,
}

#[derive(Serialize)]
struct RejectionJson {
    record: Value,
    message: String,
}

/// Write `rejections.json` into `output_dir` and return its path.
pub fn write_rejection_report_json(
    output_dir: &Path,
    rejections: &[Rejection],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("rejections.json");
    let payload = RejectionReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        rejected: rejections.len(),
        rejections: rejections
            .iter()
            .map(|rejection| RejectionJson {
                record: Value::Object(rejection.record.clone()),
                message: rejection.message(),
            })
            .collect(),
    };
    let mut document = serde_json::to_string_pretty(&payload)?;
    document.push('\n');
    fs::write(&output_path, document)?;
    Ok(output_path)
}
