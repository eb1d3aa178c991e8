mod author;
mod post;

pub use author::AuthorCommands;
pub use post::PostCommands;
