use std::fmt;

use serde::{Deserialize, Serialize};

/// Account status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    /// Parse an enumeration member. Matching is exact; there is no
    /// case-folding or synonym handling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Status::Active),
            "inactive" => Some(Status::Inactive),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The validated, normalized user entity.
///
/// Serializes with exactly the five canonical fields, in canonical order:
/// id, name, email, status, tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalUser {
    /// Unique within a processed batch.
    pub id: i64,
    /// Non-empty text.
    pub name: String,
    /// Matches the accepted address grammar.
    pub email: String,
    pub status: Status,
    /// Text-only; non-text entries are removed during transformation.
    pub tags: Vec<String>,
}
