//! Single-field attribute validators.
//!
//! Each validator is a pure function over the proposed value. On success it
//! hands the value back unchanged (or, for categories, parsed); on failure it
//! returns [`CoreError::InvalidAttribute`] carrying the user-facing message.
//!
//! Two of these checks are known to be unsatisfiable and are kept exactly as
//! observed rather than guessed at:
//!
//! - [`validate_phone_number`] compares the text value with the integer `10`.
//!   Text never equals an integer, so every assignment is rejected. Whether
//!   "exactly ten digits" was meant is an open question.
//! - [`validate_title`] requires three marketing phrases *and* a full match of
//!   `^Top \d+$`. A title matching the pattern contains only `Top`, a space and
//!   digits, so it can never contain the phrases.

use std::sync::LazyLock;

use regex::Regex;

use crate::enums::{Category, EntityKind};
use crate::errors::CoreError;

/// Content must be strictly longer than this many characters.
pub const CONTENT_MIN_EXCLUSIVE: usize = 250;

/// Summary must be strictly shorter than this many characters.
pub const SUMMARY_MAX_EXCLUSIVE: usize = 250;

/// Phrases every title must contain, checked case-insensitively in this order.
pub const REQUIRED_TITLE_PHRASES: [&str; 3] = ["Won't Believe", "Secret", "Guess"];

static TOP_PHRASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Top \d+$").expect("static title pattern is valid")
});

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

/// Reject an empty name. Uniqueness is enforced by the datastore, not here.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` when `name` is empty.
pub fn validate_name(name: &str) -> Result<&str, CoreError> {
    if name.is_empty() {
        return Err(CoreError::invalid(
            EntityKind::Author,
            "name",
            "Name is required!",
        ));
    }
    Ok(name)
}

/// Phone number check. Always rejects: see the module docs.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` for every input.
#[allow(clippy::unnecessary_wraps)]
pub fn validate_phone_number(phone_number: &str) -> Result<&str, CoreError> {
    // The stored value is text and the accepted value is the integer 10.
    let _ = phone_number;
    Err(CoreError::invalid(
        EntityKind::Author,
        "phone_number",
        "Phone Number must be 10 digits!",
    ))
}

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// Require more than 250 characters.
///
/// The message says "at least 250" but a 250-character body is rejected.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` when the content has 250 characters
/// or fewer.
pub fn validate_content(content: &str) -> Result<&str, CoreError> {
    if content.chars().count() <= CONTENT_MIN_EXCLUSIVE {
        return Err(CoreError::invalid(
            EntityKind::Post,
            "content",
            "Hey there, Content must be at least 250 characters long!",
        ));
    }
    Ok(content)
}

/// Require fewer than 250 characters.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` when the summary has 250 characters
/// or more.
pub fn validate_summary(summary: &str) -> Result<&str, CoreError> {
    if summary.chars().count() >= SUMMARY_MAX_EXCLUSIVE {
        return Err(CoreError::invalid(
            EntityKind::Post,
            "summary",
            "Hey there, Summary must not be more than 250 characters long!",
        ));
    }
    Ok(summary)
}

/// Accept exactly `"Non-Fiction"` or `"Fiction"`.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` for any other spelling.
pub fn validate_category(category: &str) -> Result<Category, CoreError> {
    category
        .parse()
        .map_err(|()| CoreError::invalid(EntityKind::Post, "category", "Category is invalid!"))
}

/// Require every phrase in [`REQUIRED_TITLE_PHRASES`] and a full match of
/// `Top <digits>`, both case-insensitive. Unsatisfiable: see the module docs.
///
/// # Errors
///
/// Returns `CoreError::InvalidAttribute` naming the first missing phrase, or
/// the pattern requirement once all phrases are present.
pub fn validate_title(title: &str) -> Result<&str, CoreError> {
    let lowered = title.to_lowercase();
    for phrase in REQUIRED_TITLE_PHRASES {
        if !lowered.contains(&phrase.to_lowercase()) {
            return Err(CoreError::invalid(
                EntityKind::Post,
                "title",
                format!("Title must contain the phrase \"{phrase}\"."),
            ));
        }
    }

    if !TOP_PHRASE_PATTERN.is_match(title) {
        return Err(CoreError::invalid(
            EntityKind::Post,
            "title",
            "Title must match the pattern \"Top [number]\".",
        ));
    }

    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chars(n: usize) -> String {
        "x".repeat(n)
    }

    #[rstest]
    #[case("Ada Lovelace")]
    #[case("a")]
    #[case(" ")]
    #[case("名前")]
    fn name_accepts_non_empty_and_returns_it(#[case] name: &str) {
        assert_eq!(validate_name(name).unwrap(), name);
    }

    #[test]
    fn name_rejects_empty() {
        let err = validate_name("").unwrap_err();
        assert_eq!(err.to_string(), "Name is required!");
        assert_eq!(err.field(), "name");
    }

    #[rstest]
    #[case("5551234567")]
    #[case("10")]
    #[case("")]
    #[case("555-123-4567")]
    #[case("+1 (555) 123-4567")]
    fn phone_number_rejects_every_value(#[case] phone: &str) {
        let err = validate_phone_number(phone).unwrap_err();
        assert_eq!(err.to_string(), "Phone Number must be 10 digits!");
        assert_eq!(err.entity(), EntityKind::Author);
    }

    #[rstest]
    #[case(251, true)]
    #[case(1000, true)]
    #[case(250, false)]
    #[case(249, false)]
    #[case(0, false)]
    fn content_boundary(#[case] len: usize, #[case] ok: bool) {
        assert_eq!(validate_content(&chars(len)).is_ok(), ok);
    }

    #[test]
    fn content_counts_characters_not_bytes() {
        // 250 two-byte characters: 500 bytes, still too short.
        let body = "é".repeat(250);
        assert!(validate_content(&body).is_err());
        let body = "é".repeat(251);
        assert!(validate_content(&body).is_ok());
    }

    #[test]
    fn content_message_says_at_least() {
        let err = validate_content(&chars(250)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Hey there, Content must be at least 250 characters long!"
        );
    }

    #[rstest]
    #[case(0, true)]
    #[case(249, true)]
    #[case(250, false)]
    #[case(251, false)]
    fn summary_boundary(#[case] len: usize, #[case] ok: bool) {
        assert_eq!(validate_summary(&chars(len)).is_ok(), ok);
    }

    #[rstest]
    #[case("Fiction", Category::Fiction)]
    #[case("Non-Fiction", Category::NonFiction)]
    fn category_accepts_known(#[case] raw: &str, #[case] expected: Category) {
        assert_eq!(validate_category(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("fiction")]
    #[case("Nonfiction")]
    #[case("Poetry")]
    #[case("")]
    fn category_rejects_unknown(#[case] raw: &str) {
        let err = validate_category(raw).unwrap_err();
        assert_eq!(err.to_string(), "Category is invalid!");
    }

    #[rstest]
    #[case("You Won't Believe This Secret, Guess What", "Title must match the pattern \"Top [number]\".")]
    #[case("you won't believe the secret guess", "Title must match the pattern \"Top [number]\".")]
    #[case("Top 10 Secrets You Won't Believe - Guess!", "Title must match the pattern \"Top [number]\".")]
    #[case("Top 10", "Title must contain the phrase \"Won't Believe\".")]
    #[case("Won't Believe", "Title must contain the phrase \"Secret\".")]
    #[case("Won't Believe the Secret", "Title must contain the phrase \"Guess\".")]
    fn title_rejections(#[case] title: &str, #[case] message: &str) {
        let err = validate_title(title).unwrap_err();
        assert_eq!(err.to_string(), message);
        assert_eq!(err.field(), "title");
    }

    #[rstest]
    #[case("Top 10")]
    #[case("top 3")]
    #[case("TOP 12345")]
    fn top_pattern_matches_only_bare_rankings(#[case] title: &str) {
        assert!(TOP_PHRASE_PATTERN.is_match(title));
        assert!(validate_title(title).is_err());
    }

    #[test]
    fn no_title_satisfies_both_rules() {
        // Anything the pattern accepts is "top", one space and digits; none
        // of the required phrases fit in that alphabet.
        for phrase in REQUIRED_TITLE_PHRASES {
            let lowered = phrase.to_lowercase();
            assert!(
                lowered
                    .chars()
                    .any(|c| !(c.is_ascii_digit() || "top ".contains(c))),
                "{phrase} could fit inside a Top <n> title"
            );
        }

        let candidates = [
            "Top 1 Won't Believe Secret Guess",
            "Won't Believe Secret Guess Top 1",
            "Top 1\nWon't Believe Secret Guess",
            "Top 10 Won't Believe",
        ];
        for title in candidates {
            assert!(validate_title(title).is_err(), "{title:?} should be rejected");
        }
    }
}
