use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Author { action } => commands::author::handle(&action, ctx, flags).await,
        Commands::Post { action } => commands::post::handle(&action, ctx, flags).await,
        Commands::Check(args) => commands::check::handle(&args, flags),
    }
}
