//! Row-to-entity parsing helpers.
//!
//! Repos read `libsql::Row` by column index. These helpers isolate the
//! parsing and handle the dual datetime format: rows written by Quill carry
//! RFC 3339 timestamps, rows filled by the column default carry `SQLite`'s
//! `datetime('now')` format.

use chrono::{DateTime, Utc};
use quill_core::enums::Category;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<DateTime<Utc>>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_datetime(s: Option<&str>) -> Result<Option<DateTime<Utc>>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_datetime(s)?)),
        _ => Ok(None),
    }
}

/// Parse a stored category. Rows are not re-validated on load, but a value
/// outside the two known spellings cannot be represented and is reported.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for an unknown spelling.
pub fn parse_category(s: Option<&str>) -> Result<Option<Category>, DatabaseError> {
    s.map(|raw| {
        raw.parse::<Category>()
            .map_err(|()| DatabaseError::InvalidState(format!("unknown post category '{raw}'")))
    })
    .transpose()
}

/// Read a nullable TEXT column.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_rfc3339() {
        let dt = parse_datetime("2026-02-09T14:30:00+00:00").unwrap();
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.day(), 9);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn optional_datetime_treats_empty_as_none() {
        assert_eq!(parse_optional_datetime(None).unwrap(), None);
        assert_eq!(parse_optional_datetime(Some("")).unwrap(), None);
        assert!(parse_optional_datetime(Some("2026-02-09 14:30:00")).unwrap().is_some());
    }

    #[test]
    fn category_parsing() {
        assert_eq!(parse_category(None).unwrap(), None);
        assert_eq!(
            parse_category(Some("Fiction")).unwrap(),
            Some(Category::Fiction)
        );
        assert!(matches!(
            parse_category(Some("Poetry")),
            Err(DatabaseError::InvalidState(_))
        ));
    }
}
