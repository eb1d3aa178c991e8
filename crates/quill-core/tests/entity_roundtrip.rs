//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use quill_core::entities::*;
use quill_core::enums::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    author_roundtrip,
    Author,
    Author::from_stored(1, "Octavia Butler".into(), None, Utc::now(), Some(Utc::now()))
);

roundtrip_and_validate!(
    post_roundtrip,
    Post,
    Post::from_stored(
        42,
        "Top 7".into(),
        Some("lorem ipsum ".repeat(30)),
        Some(Category::NonFiction),
        Some("A short summary.".into()),
        Utc::now(),
        None,
    )
);

#[test]
fn post_json_uses_category_spelling() {
    let post = Post::from_stored(
        1,
        "Top 1".into(),
        None,
        Some(Category::NonFiction),
        None,
        Utc::now(),
        None,
    );
    let json = serde_json::to_value(&post).unwrap();
    assert_eq!(json["category"], "Non-Fiction");
    assert!(json["updated_at"].is_null());
}

#[test]
fn category_schema_rejects_other_spellings() {
    let schema = serde_json::to_value(schema_for!(Category)).unwrap();
    assert!(validate_against_schema(&schema, &serde_json::json!("Fiction")).is_empty());
    assert!(!validate_against_schema(&schema, &serde_json::json!("fiction")).is_empty());
}

#[test]
fn new_author_serializes_against_its_schema() {
    let author = NewAuthor::new("Ursula K. Le Guin").unwrap();
    let schema = serde_json::to_value(schema_for!(NewAuthor)).unwrap();
    let instance = serde_json::to_value(&author).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
    assert_eq!(instance["name"], "Ursula K. Le Guin");
    assert!(instance["phone_number"].is_null());
}
