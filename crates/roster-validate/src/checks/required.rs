//! Required-field rule: presence and kind of every canonical field.

use roster_model::{CandidateRecord, RuleViolation, USER_FIELDS};

/// Check each canonical field, in authoritative order.
///
/// The first field that is absent or wrongly typed is the one reported;
/// later fields are not examined. `status` must also be an enumeration
/// member; `tags` only has to be a sequence, its elements are handled by
/// the transformer.
pub fn check_required_fields(candidate: &CandidateRecord) -> Result<(), RuleViolation> {
    for field in USER_FIELDS {
        match candidate.get(field.name) {
            None => return Err(RuleViolation::MissingField(field.name)),
            Some(value) if !field.kind.matches(value) => {
                return Err(RuleViolation::IncorrectType(field.name));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
