//! Transformation of validated records into canonical users.
//!
//! Records reaching this crate are assumed to have already passed
//! validation; nothing here re-checks them. The fallbacks in
//! [`transform_record`] never fire for conforming input.

use roster_model::{CandidateRecord, CanonicalUser, Status, USER_FIELDS};
use serde_json::Value;
use tracing::debug;

/// Keep only the canonical fields, in canonical order; drop all other
/// keys.
pub fn project_record(record: &CandidateRecord) -> CandidateRecord {
    USER_FIELDS
        .iter()
        .filter_map(|field| {
            record
                .get(field.name)
                .map(|value| (field.name.to_string(), value.clone()))
        })
        .collect()
}

/// Keep only the text elements of a tag sequence, preserving relative
/// order. Numbers, booleans, nested structures and null are dropped.
pub fn filter_tags(tags: &[Value]) -> Vec<String> {
    tags.iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

/// Project one validated record into the canonical user shape.
///
/// Non-integer numeric ids are truncated to their integer part.
pub fn transform_record(record: &CandidateRecord) -> CanonicalUser {
    let projected = project_record(record);
    CanonicalUser {
        id: projected.get("id").map(numeric_id).unwrap_or_default(),
        name: text_field(&projected, "name"),
        email: text_field(&projected, "email"),
        status: projected
            .get("status")
            .and_then(Value::as_str)
            .and_then(Status::parse)
            .unwrap_or(Status::Inactive),
        tags: projected
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| filter_tags(tags))
            .unwrap_or_default(),
    }
}

/// Transform every validated record, order-preserving, one output per
/// input.
pub fn transform_batch(valid: &[CandidateRecord]) -> Vec<CanonicalUser> {
    let users: Vec<CanonicalUser> = valid.iter().map(transform_record).collect();
    debug!(count = users.len(), "batch transformed");
    users
}

fn numeric_id(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|id| id as i64))
        .unwrap_or_default()
}

fn text_field(record: &CandidateRecord, name: &str) -> String {
    record
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
