use serde::Serialize;
use quill_core::entities::Post;
use quill_core::validators::validate_category;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::list_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PostListResponse {
    posts: Vec<Post>,
}

pub async fn run(
    category: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let category = category.map(validate_category).transpose()?;
    let posts = ctx
        .service
        .list_posts(category, list_limit(limit, ctx, flags))
        .await?;
    output(&PostListResponse { posts }, flags.format)
}
