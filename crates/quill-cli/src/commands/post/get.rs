use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let post = ctx
        .service
        .get_post(id)
        .await
        .with_context(|| format!("post {id}"))?;
    output(&post, flags.format)
}
