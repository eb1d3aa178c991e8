use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service
        .delete_author(id)
        .await
        .with_context(|| format!("author {id}"))?;
    output(&json!({"deleted": true, "author_id": id}), flags.format)
}
