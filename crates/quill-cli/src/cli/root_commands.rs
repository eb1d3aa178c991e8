use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::{AuthorCommands, PostCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authors.
    Author {
        #[command(subcommand)]
        action: AuthorCommands,
    },
    /// Posts.
    Post {
        #[command(subcommand)]
        action: PostCommands,
    },
    /// Run a single field validator without touching the database.
    Check(CheckArgs),
}

/// Field names accepted by `quill check`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CheckField {
    AuthorName,
    AuthorPhone,
    PostTitle,
    PostContent,
    PostSummary,
    PostCategory,
}

/// Arguments for `quill check`.
#[derive(Clone, Debug, Args)]
pub struct CheckArgs {
    pub field: CheckField,
    pub value: String,
}
