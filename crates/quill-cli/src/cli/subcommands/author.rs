use clap::Subcommand;

/// Author entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthorCommands {
    /// Create an author.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Get an author by ID.
    Get { id: i64 },
    /// List authors.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update an author.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Delete an author.
    Delete { id: i64 },
}
