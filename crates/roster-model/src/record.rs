use serde_json::{Map, Value};

/// An untrusted candidate record as decoded from the input source.
///
/// An open-ended mapping from field name to arbitrary JSON value. No
/// invariants hold: fields may be missing, wrongly typed, or extra.
pub type CandidateRecord = Map<String, Value>;
