pub mod error;
pub mod record;
pub mod rejection;
pub mod schema;
pub mod user;

pub use error::{Result, RosterError};
pub use record::CandidateRecord;
pub use rejection::{Rejection, RuleViolation};
pub use schema::{FieldKind, FieldSpec, USER_FIELDS};
pub use user::{CanonicalUser, Status};
