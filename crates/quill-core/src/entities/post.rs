use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::errors::CoreError;
use crate::validators::{validate_category, validate_content, validate_summary, validate_title};

/// A blog post. Only `title` is required; the other text fields are optional
/// but validated whenever they are assigned.
///
/// No relationship to [`Author`](super::Author) is declared.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Post {
    id: i64,
    title: String,
    content: Option<String>,
    category: Option<Category>,
    summary: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Rehydrate a stored row. No validators run.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn from_stored(
        id: i64,
        title: String,
        content: Option<String>,
        category: Option<Category>,
        summary: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            category,
            summary,
            created_at,
            updated_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
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

    /// # Errors
    ///
    /// Always returns `CoreError::InvalidAttribute`; see [`validate_title`].
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), CoreError> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the content has 250
    /// characters or fewer.
    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), CoreError> {
        let content = content.into();
        validate_content(&content)?;
        self.content = Some(content);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` unless `category` is exactly
    /// `"Non-Fiction"` or `"Fiction"`.
    pub fn set_category(&mut self, category: &str) -> Result<(), CoreError> {
        self.category = Some(validate_category(category)?);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the summary has 250
    /// characters or more.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> Result<(), CoreError> {
        let summary = summary.into();
        validate_summary(&summary)?;
        self.summary = Some(summary);
        Ok(())
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post(id={}, title={} content={}, summary={})",
            self.id,
            self.title,
            self.content.as_deref().unwrap_or("None"),
            self.summary.as_deref().unwrap_or("None"),
        )
    }
}

/// A validated post that has not been stored yet.
///
/// Construction goes through [`validate_title`], which no title passes, so
/// `NewPost::new` currently always fails.
///
/// Not `Deserialize`: values enter only through the validating constructors.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct NewPost {
    title: String,
    content: Option<String>,
    category: Option<Category>,
    summary: Option<String>,
}

impl NewPost {
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` from the title validator.
    pub fn new(title: impl Into<String>) -> Result<Self, CoreError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self {
            title,
            content: None,
            category: None,
            summary: None,
        })
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the content has 250
    /// characters or fewer.
    pub fn with_content(mut self, content: impl Into<String>) -> Result<Self, CoreError> {
        let content = content.into();
        validate_content(&content)?;
        self.content = Some(content);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` for an unknown category.
    pub fn with_category(mut self, category: &str) -> Result<Self, CoreError> {
        self.category = Some(validate_category(category)?);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidAttribute` if the summary has 250
    /// characters or more.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Result<Self, CoreError> {
        let summary = summary.into();
        validate_summary(&summary)?;
        self.summary = Some(summary);
        Ok(self)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
