//! Batch validation for candidate user records.
//!
//! Three rules, applied per candidate in a fixed order, short-circuiting
//! on the first failure:
//!
//! 1. Required fields present with the expected kinds
//! 2. Email format against the accepted address grammar
//! 3. Id uniqueness across the whole batch (positional, first claim wins)
//!
//! Rejected candidates are excluded from the valid set and paired with the
//! violated rule; the completed rejection list goes to the injected
//! reporting collaborator exactly once per batch.

mod checks;

pub use checks::{
    ID_SENTINEL, check_email_format, check_required_fields, check_unique_id, declared_ids,
};

use roster_model::{CandidateRecord, Rejection};
use tracing::{debug, info};

/// Receives the complete rejection list once per validation run.
///
/// Implementations own presentation (console tables, report files); the
/// validator itself has no output side effects.
pub trait RejectionReporter {
    /// Called exactly once per batch, after every candidate is classified,
    /// with zero or more rejections. Never called per-candidate.
    fn report(&mut self, rejections: &[Rejection]);
}

/// A reporter that discards the rejection list.
#[derive(Debug, Default)]
pub struct NullReporter;

impl RejectionReporter for NullReporter {
    fn report(&mut self, _rejections: &[Rejection]) {}
}

/// Result of validating one batch.
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    /// Candidates that passed every rule, unchanged, in input order.
    pub valid: Vec<CandidateRecord>,
    /// One rejection per failed candidate, in input order.
    pub rejections: Vec<Rejection>,
}

/// Classify every candidate in the batch.
///
/// Returns the accepted candidates and the parallel rejection list, and
/// hands the completed list to `reporter` once all candidates are
/// classified. No partial candidate is ever emitted.
pub fn validate_batch(
    candidates: Vec<CandidateRecord>,
    reporter: &mut dyn RejectionReporter,
) -> ValidationOutcome {
    // Ids are claimed by every batch entry, valid or not, before any
    // candidate is judged.
    let batch_ids = checks::declared_ids(&candidates);

    let mut outcome = ValidationOutcome::default();
    for (index, candidate) in candidates.into_iter().enumerate() {
        match checks::run_all(&candidate, index, &batch_ids) {
            Ok(()) => outcome.valid.push(candidate),
            Err(violation) => {
                debug!(index, %violation, "candidate rejected");
                outcome.rejections.push(Rejection::new(candidate, violation));
            }
        }
    }

    info!(
        valid = outcome.valid.len(),
        rejected = outcome.rejections.len(),
        "batch classified"
    );
    reporter.report(&outcome.rejections);
    outcome
}
