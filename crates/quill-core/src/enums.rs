//! Category and entity-kind enums for Quill.
//!
//! `Category` serializes with its display spelling (`"Non-Fiction"`,
//! `"Fiction"`) because that exact text is what gets stored and validated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Post category. Only these two spellings are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Fiction")]
    Fiction,
}

impl Category {
    pub const ALL: [Self; 2] = [Self::NonFiction, Self::Fiction];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonFiction => "Non-Fiction",
            Self::Fiction => "Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the stored spellings.
impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or(())
    }
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Type of persisted record, used in errors and table mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Author,
    Post,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Post => "post",
        }
    }

    /// SQL table backing this entity.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Author => "authors",
            Self::Post => "posts",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
