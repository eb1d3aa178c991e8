//! Cross-cutting error types for Quill.
//!
//! Validation failures originate here. Persistence errors (`DatabaseError`)
//! and configuration errors (`ConfigError`) live in their own crates and
//! converge into `anyhow::Error` in `quill-cli`.

use thiserror::Error;

use crate::enums::EntityKind;

/// Errors that can be raised by any Quill crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A proposed attribute value was rejected by its validator.
    ///
    /// Raised synchronously at assignment time, before anything is stored.
    #[error("{message}")]
    InvalidAttribute {
        entity: EntityKind,
        field: &'static str,
        message: String,
    },
}

impl CoreError {
    pub(crate) fn invalid(entity: EntityKind, field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            entity,
            field,
            message: message.into(),
        }
    }

    /// Name of the rejected attribute.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidAttribute { field, .. } => *field,
        }
    }

    /// Entity the rejected attribute belongs to.
    #[must_use]
    pub const fn entity(&self) -> EntityKind {
        match self {
            Self::InvalidAttribute { entity, .. } => *entity,
        }
    }
}
