//! Tests for record projection and tag sanitization.

use proptest::prelude::*;
use roster_model::{CandidateRecord, CanonicalUser, Status};
use roster_transform::{filter_tags, project_record, transform_batch, transform_record};
use serde_json::{Value, json};

fn record(value: Value) -> CandidateRecord {
    value.as_object().expect("object literal").clone()
}

#[test]
fn projection_drops_unknown_keys_and_keeps_canonical_order() {
    let user = record(json!({
        "role": "admin",
        "email": "john@example.com",
        "tags": ["tag1"],
        "id": 1,
        "extra": true,
        "name": "John Doe",
        "status": "active",
    }));

    let projected = project_record(&user);
    let keys: Vec<&str> = projected.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "name", "email", "status", "tags"]);
    assert_eq!(projected["id"], json!(1));
    assert_eq!(projected["email"], json!("john@example.com"));
}

#[test]
fn projection_skips_fields_the_record_does_not_carry() {
    // Not reachable through the validated pipeline, but projection itself
    // is total: absent fields are simply not emitted.
    let partial = record(json!({"id": 1, "extra": "x"}));
    let projected = project_record(&partial);
    let keys: Vec<&str> = projected.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id"]);
}

#[test]
fn filter_tags_keeps_text_elements_in_order() {
    let tags = vec![json!(1), json!("tag2"), json!(true), json!("tag4")];
    assert_eq!(filter_tags(&tags), ["tag2", "tag4"]);
}

#[test]
fn filter_tags_drops_nested_structures_and_null() {
    let tags = vec![
        json!(null),
        json!("keep"),
        json!(["nested"]),
        json!({"k": "v"}),
        json!(2.5),
    ];
    assert_eq!(filter_tags(&tags), ["keep"]);
}

#[test]
fn filter_tags_of_empty_input_is_empty() {
    assert_eq!(filter_tags(&[]), Vec::<String>::new());
}

#[test]
fn transform_record_builds_the_canonical_user() {
    let user = record(json!({
        "id": 1,
        "name": "John Doe",
        "email": "john@example.com",
        "status": "active",
        "tags": [1, "tag2", true, "tag4"],
        "role": "admin",
    }));

    assert_eq!(
        transform_record(&user),
        CanonicalUser {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            status: Status::Active,
            tags: vec!["tag2".to_string(), "tag4".to_string()],
        }
    );
}

#[test]
fn transform_record_truncates_fractional_ids() {
    let user = record(json!({
        "id": 2.9,
        "name": "Frac",
        "email": "frac@example.com",
        "status": "inactive",
        "tags": [],
    }));
    assert_eq!(transform_record(&user).id, 2);
}

#[test]
fn transform_batch_preserves_order_one_output_per_input() {
    let users = vec![
        record(json!({
            "id": 1,
            "name": "A",
            "email": "a@example.com",
            "status": "active",
            "tags": ["t1"],
        })),
        record(json!({
            "id": 2,
            "name": "B",
            "email": "b@example.com",
            "status": "inactive",
            "tags": [],
        })),
    ];

    let transformed = transform_batch(&users);
    assert_eq!(transformed.len(), 2);
    assert_eq!(transformed[0].id, 1);
    assert_eq!(transformed[1].id, 2);
    assert!(transformed[1].tags.is_empty());
}

fn tag_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
    ]
}

proptest! {
    #[test]
    fn filter_tags_keeps_exactly_the_text_elements(
        tags in prop::collection::vec(tag_value(), 0..16)
    ) {
        let filtered = filter_tags(&tags);
        prop_assert_eq!(
            filtered.len(),
            tags.iter().filter(|tag| tag.is_string()).count()
        );
        let mut remaining = filtered.iter();
        for tag in &tags {
            if let Some(text) = tag.as_str() {
                prop_assert_eq!(remaining.next().map(String::as_str), Some(text));
            }
        }
        prop_assert!(remaining.next().is_none());
    }
}
