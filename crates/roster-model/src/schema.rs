use serde_json::Value;

use crate::user::Status;

/// Expected kind of a canonical field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// JSON number.
    Number,
    /// JSON string.
    Text,
    /// JSON string that is a member of the status enumeration.
    Status,
    /// JSON array; element contents are not checked at validation time.
    TagList,
}

impl FieldKind {
    /// Whether `value` satisfies this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::Number => value.is_number(),
            FieldKind::Text => value.is_string(),
            FieldKind::Status => value.as_str().is_some_and(|text| Status::parse(text).is_some()),
            FieldKind::TagList => value.is_array(),
        }
    }
}

/// A canonical field with its expected kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// The canonical field set, in authoritative order.
///
/// Order determines which field a rejection names first and the key order
/// of projected records.
pub const USER_FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "id", kind: FieldKind::Number },
    FieldSpec { name: "name", kind: FieldKind::Text },
    FieldSpec { name: "email", kind: FieldKind::Text },
    FieldSpec { name: "status", kind: FieldKind::Status },
    FieldSpec { name: "tags", kind: FieldKind::TagList },
];
