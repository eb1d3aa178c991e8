use serde::Serialize;

use quill_core::errors::CoreError;
use quill_core::validators::{
    validate_category, validate_content, validate_name, validate_phone_number, validate_summary,
    validate_title,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{CheckArgs, CheckField};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct CheckResponse {
    field: &'static str,
    valid: bool,
    error: Option<String>,
}

/// Handle `quill check`. A rejected value is a normal result, not a failure.
pub fn handle(args: &CheckArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&check(args.field, &args.value), flags.format)
}

fn check(field: CheckField, value: &str) -> CheckResponse {
    let result: Result<(), CoreError> = match field {
        CheckField::AuthorName => validate_name(value).map(drop),
        CheckField::AuthorPhone => validate_phone_number(value).map(drop),
        CheckField::PostTitle => validate_title(value).map(drop),
        CheckField::PostContent => validate_content(value).map(drop),
        CheckField::PostSummary => validate_summary(value).map(drop),
        CheckField::PostCategory => validate_category(value).map(drop),
    };

    CheckResponse {
        field: field_name(field),
        valid: result.is_ok(),
        error: result.err().map(|error| error.to_string()),
    }
}

const fn field_name(field: CheckField) -> &'static str {
    match field {
        CheckField::AuthorName => "author-name",
        CheckField::AuthorPhone => "author-phone",
        CheckField::PostTitle => "post-title",
        CheckField::PostContent => "post-content",
        CheckField::PostSummary => "post-summary",
        CheckField::PostCategory => "post-category",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CheckResponse, check};
    use crate::cli::root_commands::CheckField;

    #[test]
    fn valid_value_has_no_error() {
        assert_eq!(
            check(CheckField::PostCategory, "Fiction"),
            CheckResponse {
                field: "post-category",
                valid: true,
                error: None,
            }
        );
    }

    #[test]
    fn rejected_value_carries_message() {
        let response = check(CheckField::PostContent, "too short");
        assert!(!response.valid);
        assert_eq!(
            response.error.as_deref(),
            Some("Hey there, Content must be at least 250 characters long!")
        );
    }

    #[test]
    fn phone_and_title_never_pass() {
        assert!(!check(CheckField::AuthorPhone, "5551234567").valid);
        assert!(!check(CheckField::PostTitle, "Top 10").valid);
    }

    #[test]
    fn response_serializes_null_error() {
        let json = serde_json::to_value(check(CheckField::AuthorName, "Ada")).expect("json");
        assert_eq!(
            json,
            serde_json::json!({"field": "author-name", "valid": true, "error": null})
        );
    }
}
