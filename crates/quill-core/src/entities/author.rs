use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::validators::{validate_name, validate_phone_number};

/// A blog author. `name` is unique across all authors (datastore constraint).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Author {
    id: i64,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Author {
    /// Rehydrate a stored row. No validators run.
    #[must_use]
    pub const fn from_stored(
        id: i64,
        name: String,
        phone_number: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            phone_number,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// `None` until the first update.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Assign a new name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the name is empty; the author
    /// is left unchanged.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Assign a phone number.
    ///
    /// # Errors
    ///
    /// Always returns `CoreError::InvalidAttribute`; see
    /// [`validate_phone_number`].
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) -> Result<(), CoreError> {
        let phone_number = phone_number.into();
        validate_phone_number(&phone_number)?;
        self.phone_number = Some(phone_number);
        Ok(())
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}

/// A validated author that has not been stored yet.
///
/// Not `Deserialize`: values enter only through the validating constructors.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct NewAuthor {
    name: String,
    phone_number: Option<String>,
}

impl NewAuthor {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            phone_number: None,
        })
    }

    /// # Errors
    ///
    /// Always returns `CoreError::InvalidAttribute`; see
    /// [`validate_phone_number`].
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Result<Self, CoreError> {
        let phone_number = phone_number.into();
        validate_phone_number(&phone_number)?;
        self.phone_number = Some(phone_number);
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stored() -> Author {
        Author::from_stored(7, "Grace Hopper".into(), None, Utc::now(), None)
    }

    #[test]
    fn new_author_keeps_name() {
        let author = NewAuthor::new("Grace Hopper").unwrap();
        assert_eq!(author.name(), "Grace Hopper");
        assert_eq!(author.phone_number(), None);
    }

    #[test]
    fn new_author_rejects_empty_name() {
        let err = NewAuthor::new("").unwrap_err();
        assert_eq!(err.to_string(), "Name is required!");
    }

    #[test]
    fn new_author_phone_is_always_rejected() {
        let err = NewAuthor::new("Grace Hopper")
            .unwrap()
            .with_phone_number("5551234567")
            .unwrap_err();
        assert_eq!(err.field(), "phone_number");
    }

    #[test]
    fn set_name_replaces_value() {
        let mut author = stored();
        author.set_name("Rear Admiral Hopper").unwrap();
        assert_eq!(author.name(), "Rear Admiral Hopper");
    }

    #[test]
    fn rejected_assignment_leaves_author_untouched() {
        let mut author = stored();
        let before = author.clone();

        assert!(author.set_name("").is_err());
        assert!(author.set_phone_number("5551234567").is_err());
        assert_eq!(author, before);
    }

    #[test]
    fn display_matches_repr() {
        assert_eq!(stored().to_string(), "Author(id=7, name=Grace Hopper)");
    }
}
