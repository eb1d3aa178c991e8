//! Entity structs for the persisted Quill records.
//!
//! Each entity maps to a table in the libSQL database (`authors`, `posts`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.
//!
//! Fields are private. Values reach an entity only through a validating
//! constructor (`NewAuthor::new`, `NewPost::new`) or setter, so a rejected
//! value never lands in the struct. Rows loaded back from the datastore are
//! rehydrated with `from_stored` and are not re-validated.

mod author;
mod post;

pub use author::{Author, NewAuthor};
pub use post::{NewPost, Post};
