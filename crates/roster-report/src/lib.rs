//! Output collaborators for the roster pipeline.
//!
//! Two writers: the normalized-user JSON document (the pipeline's product)
//! and the versioned rejection report (its diagnostics).

mod rejections;
mod users;

pub use rejections::{REPORT_SCHEMA, REPORT_SCHEMA_VERSION, write_rejection_report_json};
pub use users::write_users_json;
