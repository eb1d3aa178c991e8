use clap::Subcommand;

/// Post entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PostCommands {
    /// Create a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// "Non-Fiction" or "Fiction"
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Get a post by ID.
    Get { id: i64 },
    /// List posts.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a post.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        summary: Option<String>,
    },
    /// Delete a post.
    Delete { id: i64 },
}
