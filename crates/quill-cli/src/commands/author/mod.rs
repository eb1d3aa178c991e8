mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthorCommands;
use crate::context::AppContext;

/// Handle `quill author`.
pub async fn handle(
    action: &AuthorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuthorCommands::Create { name, phone } => {
            create::run(name, phone.as_deref(), ctx, flags).await
        }
        AuthorCommands::Get { id } => get::run(*id, ctx, flags).await,
        AuthorCommands::List { limit } => list::run(*limit, ctx, flags).await,
        AuthorCommands::Update { id, name, phone } => {
            update::run(*id, name.clone(), phone.clone(), ctx, flags).await
        }
        AuthorCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
