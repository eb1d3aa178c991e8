use anyhow::Context;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service
        .delete_post(id)
        .await
        .with_context(|| format!("post {id}"))?;
    output(&json!({"deleted": true, "post_id": id}), flags.format)
}
