//! Id-uniqueness rule, scoped to one batch.

use roster_model::{CandidateRecord, RuleViolation};
use serde_json::Value;

/// Stands in for an absent or non-numeric id in the batch scan.
///
/// The sentinel is itself eligible to collide: a literal id of -1 occupies
/// the same slot as a malformed record, and two malformed records suppress
/// each other. Inherited behavior, kept as is.
pub const ID_SENTINEL: f64 = -1.0;

/// Precompute the declared id of every candidate in the batch, invalid
/// ones included, substituting [`ID_SENTINEL`] where no numeric id exists.
pub fn declared_ids(candidates: &[CandidateRecord]) -> Vec<f64> {
    candidates.iter().map(declared_id).collect()
}

/// The id a candidate claims in the batch scan.
pub fn declared_id(candidate: &CandidateRecord) -> f64 {
    candidate
        .get("id")
        .and_then(Value::as_f64)
        .unwrap_or(ID_SENTINEL)
}

/// Check that `index` is the first position in the batch carrying `id`.
///
/// The scan covers the whole batch, not just valid records: an invalid
/// earlier record still claims its id and rejects a later duplicate.
pub fn check_unique_id(batch_ids: &[f64], id: f64, index: usize) -> Result<(), RuleViolation> {
    let first = batch_ids.iter().position(|&declared| declared == id);
    if first == Some(index) {
        Ok(())
    } else {
        Err(RuleViolation::DuplicateId(id))
    }
}
