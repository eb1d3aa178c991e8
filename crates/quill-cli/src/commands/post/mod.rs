mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PostCommands;
use crate::context::AppContext;

/// Handle `quill post`.
pub async fn handle(
    action: &PostCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PostCommands::Create {
            title,
            content,
            category,
            summary,
        } => {
            create::run(
                title,
                content.as_deref(),
                category.as_deref(),
                summary.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        PostCommands::Get { id } => get::run(*id, ctx, flags).await,
        PostCommands::List { category, limit } => {
            list::run(category.as_deref(), *limit, ctx, flags).await
        }
        PostCommands::Update {
            id,
            title,
            content,
            category,
            summary,
        } => {
            let update = update::UpdateArgs {
                title: title.clone(),
                content: content.clone(),
                category: category.clone(),
                summary: summary.clone(),
            };
            update::run(*id, update, ctx, flags).await
        }
        PostCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}
