use thiserror::Error;

use crate::record::CandidateRecord;

/// The first rule a candidate violated.
///
/// Violations are per-candidate data, not fatal errors: each one becomes a
/// [`Rejection`] and the rest of the batch keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleViolation {
    /// A canonical field is absent from the candidate.
    #[error("User is missing '{0}' field")]
    MissingField(&'static str),
    /// A canonical field is present with the wrong kind of value.
    #[error("Field '{0}' has an incorrect type")]
    IncorrectType(&'static str),
    /// The email value does not match the accepted address grammar.
    #[error("Value for 'email' has an incorrect format")]
    InvalidEmailFormat,
    /// The candidate's id was already claimed by an earlier batch entry.
    /// Carries the id in the batch-scan representation; integral values
    /// display without a decimal point.
    #[error("User 'id' {0} is duplicated")]
    DuplicateId(f64),
}

/// A candidate paired with the first rule it violated.
///
/// Created by the validator at the moment a rule fails; consumed once by
/// the reporting collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// The original candidate, unchanged.
    pub record: CandidateRecord,
    /// The violation that excluded it.
    pub violation: RuleViolation,
}

impl Rejection {
    pub fn new(record: CandidateRecord, violation: RuleViolation) -> Self {
        Self { record, violation }
    }

    /// Human-readable rejection reason.
    pub fn message(&self) -> String {
        self.violation.to_string()
    }
}
