//! Validation rule modules.
//!
//! One module per rule; [`run_all`] applies them in the authoritative
//! order and stops at the first violation.

mod email;
mod required;
mod unique;

pub use email::check_email_format;
pub use required::check_required_fields;
pub use unique::{ID_SENTINEL, check_unique_id, declared_id, declared_ids};

use roster_model::{CandidateRecord, RuleViolation};
use serde_json::Value;

/// Apply every rule to one candidate, in order.
///
/// `batch_ids` is the precomputed id list for the whole batch (see
/// [`declared_ids`]); `index` is the candidate's position in it.
pub fn run_all(
    candidate: &CandidateRecord,
    index: usize,
    batch_ids: &[f64],
) -> Result<(), RuleViolation> {
    check_required_fields(candidate)?;
    // The required-field rule guarantees `email` is text and `id` numeric
    // from here on.
    let email = candidate
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default();
    check_email_format(email)?;
    check_unique_id(batch_ids, declared_id(candidate), index)
}
