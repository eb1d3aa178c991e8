//! # quill-core
//!
//! Entity types, attribute validators, and error types for Quill.
//!
//! This crate provides the foundational types shared across all Quill crates:
//! - Entity structs for the two persisted records (`Author`, `Post`)
//! - Validating constructors (`NewAuthor`, `NewPost`) and setters
//! - Single-field validator functions run on every attribute assignment
//! - The `Category` and `EntityKind` enums
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validators;
