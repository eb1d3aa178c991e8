//! Author update builder.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorUpdate {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthorUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone_number.is_none()
    }
}

pub struct AuthorUpdateBuilder(AuthorUpdate);

impl AuthorUpdateBuilder {
    pub fn new() -> Self {
        Self(AuthorUpdate::default())
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    pub fn phone_number(mut self, val: impl Into<String>) -> Self {
        self.0.phone_number = Some(val.into());
        self
    }

    pub fn build(self) -> AuthorUpdate {
        self.0
    }
}

impl Default for AuthorUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
