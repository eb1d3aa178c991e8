//! Post update builder.
//!
//! `category` is carried as raw text so an unknown spelling reaches the
//! category validator instead of failing earlier.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
}

impl PostUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.summary.is_none()
    }
}

pub struct PostUpdateBuilder(PostUpdate);

impl PostUpdateBuilder {
    pub fn new() -> Self {
        Self(PostUpdate::default())
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub fn content(mut self, val: impl Into<String>) -> Self {
        self.0.content = Some(val.into());
        self
    }

    pub fn category(mut self, val: impl Into<String>) -> Self {
        self.0.category = Some(val.into());
        self
    }

    pub fn summary(mut self, val: impl Into<String>) -> Self {
        self.0.summary = Some(val.into());
        self
    }

    pub fn build(self) -> PostUpdate {
        self.0
    }
}

impl Default for PostUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
