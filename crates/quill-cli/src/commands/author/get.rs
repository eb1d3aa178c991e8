use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let author = ctx
        .service
        .get_author(id)
        .await
        .with_context(|| format!("author {id}"))?;
    output(&author, flags.format)
}
