//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are assigned (and therefore validated) and only those generate SET
//! clauses in the dynamic UPDATE SQL.

pub mod author;
pub mod post;
