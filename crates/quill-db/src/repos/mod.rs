//! Repository modules implementing CRUD operations for authors and posts.
//!
//! Each module adds methods to `QuillService` via `impl QuillService` blocks.

pub mod author;
pub mod post;
